use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::thread;
use test_env_log::test;
use weightedrand::weighted::linear::weighted_random;
use weightedrand::weighted::random::RngSource;
use weightedrand::weighted::{Chooser, ChooserError};

// Chi-squared critical values at p = 0.001, indexed by degrees of freedom
const CHI_SQUARED_CRITICAL: [f64; 4] = [0.0, 10.828, 13.816, 16.266];

fn count_picks<T: Clone + Eq + Hash>(
    chooser: &Chooser<T>,
    draws: usize,
    seed: u64,
) -> HashMap<T, usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut counts = HashMap::new();
    for _ in 0..draws {
        let item = chooser.pick_with(&mut rng).unwrap().clone();
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

fn chi_squared<T: Eq + Hash>(counts: &HashMap<T, usize>, expected: &[(T, f64)], draws: usize) -> f64 {
    expected
        .iter()
        .map(|(item, p)| {
            let expected_count = p * draws as f64;
            let observed = *counts.get(item).unwrap_or(&0) as f64;
            (observed - expected_count).powi(2) / expected_count
        })
        .sum()
}

#[test]
fn test_abc_frequencies() {
    let chooser = Chooser::from_pairs(vec![('A', 1), ('B', 2), ('C', 7)]).unwrap();
    assert_eq!(chooser.total(), 10);
    let draws = 100_000;
    let counts = count_picks(&chooser, draws, 1234);
    for (item, expected) in [('A', 0.10), ('B', 0.20), ('C', 0.70)] {
        let observed = counts[&item] as f64 / draws as f64;
        assert!(
            (observed - expected).abs() < 0.02,
            "{} observed {} expected {}",
            item,
            observed,
            expected
        );
    }
}

#[test]
fn test_goodness_of_fit() {
    let weights = vec![("w1", 5), ("w2", 10), ("w3", 30), ("w4", 55)];
    let chooser = Chooser::from_pairs(weights.clone()).unwrap();
    let draws = 200_000;
    let counts = count_picks(&chooser, draws, 99);
    let expected: Vec<(&str, f64)> = weights
        .iter()
        .map(|(item, w)| (*item, *w as f64 / 100.0))
        .collect();
    let statistic = chi_squared(&counts, &expected, draws);
    assert!(
        statistic < CHI_SQUARED_CRITICAL[3],
        "chi squared {} too large",
        statistic
    );
}

#[test]
fn test_input_order_does_not_change_frequencies() {
    let forward = Chooser::from_pairs(vec![("A", 1), ("B", 3)]).unwrap();
    let reverse = Chooser::from_pairs(vec![("B", 3), ("A", 1)]).unwrap();
    assert_eq!(forward.totals(), reverse.totals());
    let draws = 50_000;
    for chooser in [forward, reverse] {
        let counts = count_picks(&chooser, draws, 5);
        let statistic = chi_squared(&counts, &[("A", 0.25), ("B", 0.75)], draws);
        assert!(statistic < CHI_SQUARED_CRITICAL[1]);
    }
}

#[test]
fn test_zero_weights_excluded_over_many_draws() {
    let chooser = Chooser::from_pairs(vec![(0, 0), (1, 4), (2, 0), (3, 1), (4, 0)]).unwrap();
    assert_eq!(chooser.len(), 5);
    let counts = count_picks(&chooser, 20_000, 8);
    assert_eq!(counts.keys().filter(|k| **k % 2 == 0).count(), 0);
}

#[test]
fn test_empty_and_negative() {
    let empty: Chooser<&str> = Chooser::new(vec![]).unwrap();
    for _ in 0..5 {
        assert_eq!(empty.pick(), Err(ChooserError::NoChoices));
    }
    assert!(matches!(
        Chooser::from_pairs(vec![("A", -1)]),
        Err(ChooserError::InvalidWeight {
            index: 0,
            weight: -1
        })
    ));
}

#[test]
fn test_default_source_single_choice() {
    let chooser = Chooser::from_pairs(vec![("X", 5)]).unwrap();
    for _ in 0..100 {
        assert_eq!(chooser.pick(), Ok(&"X"));
    }
}

#[test]
fn test_shared_between_threads() {
    let chooser = Arc::new(Chooser::from_pairs(vec![("A", 1), ("B", 2), ("C", 7)]).unwrap());
    let draws = 20_000;
    let handles: Vec<_> = (0..4)
        .map(|seed| {
            let chooser = Arc::clone(&chooser);
            thread::spawn(move || count_picks(&chooser, draws, seed))
        })
        .collect();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for handle in handles {
        for (item, count) in handle.join().unwrap() {
            *counts.entry(item).or_insert(0) += count;
        }
    }
    assert_eq!(counts.values().sum::<usize>(), 4 * draws);
    let statistic = chi_squared(&counts, &[("A", 0.1), ("B", 0.2), ("C", 0.7)], 4 * draws);
    assert!(statistic < CHI_SQUARED_CRITICAL[2]);
}

#[test]
fn test_agrees_with_linear_scan() {
    // Same ascending order and same draws, so both pick the same item every time
    let items = vec![(10, 1u32), (20, 2), (30, 0), (40, 7)];
    let mut sorted = items.clone();
    sorted.sort_by_key(|(_, w)| *w);
    let chooser = Chooser::from_pairs(items.iter().map(|(i, w)| (*i, *w as i64))).unwrap();
    let mut chooser_rng = RngSource(StdRng::seed_from_u64(77));
    let mut linear_rng = RngSource(StdRng::seed_from_u64(77));
    for _ in 0..1000 {
        assert_eq!(
            chooser.pick_with(&mut chooser_rng).ok(),
            weighted_random(&sorted, &mut linear_rng)
        );
    }
}
