//! Benchmarks picking from a prebuilt chooser against a linear scan per pick
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::time::Instant;
use weightedrand::weighted::linear::weighted_random;
use weightedrand::weighted::Chooser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
    #[arg(short, long, default_value_t = 1000)]
    items: usize,
    #[arg(short, long, default_value_t = 100000)]
    draws: usize,
    #[arg(short, long, default_value_t = 10)]
    episodes: usize,
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
}

fn report(name: &str, draws: usize, seconds: f64) {
    println!(
        "{}: {} picks in {:.4} seconds ({:.2} picks per second)",
        name,
        draws,
        seconds,
        draws as f64 / seconds
    );
}

fn run_chooser(chooser: &Chooser<usize>, draws: usize, rng: &mut StdRng) -> f64 {
    let start = Instant::now();
    for _ in 0..draws {
        if let Ok(item) = chooser.pick_with(rng) {
            black_box(item);
        }
    }
    let elapsed = start.elapsed().as_secs_f64();
    report("chooser", draws, elapsed);
    elapsed
}

fn run_linear(items: &[(usize, u32)], draws: usize, rng: &mut StdRng) -> f64 {
    let start = Instant::now();
    for _ in 0..draws {
        black_box(weighted_random(items, rng));
    }
    let elapsed = start.elapsed().as_secs_f64();
    report("linear", draws, elapsed);
    elapsed
}

fn main() {
    let args = Args::parse();
    println!(
        "===\nItems: {}, Draws: {}, Episodes: {}",
        args.items, args.draws, args.episodes
    );
    println!("---");
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let mut rng = StdRng::seed_from_u64(args.seed);
    let items: Vec<(usize, u32)> = (0..args.items)
        .map(|i| (i, rng.gen_range(0..1000)))
        .collect();

    let start = Instant::now();
    let chooser = match Chooser::from_pairs(items.iter().map(|(i, w)| (*i, *w as i64))) {
        Ok(chooser) => chooser,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    println!(
        "Built chooser in {:.6} seconds",
        start.elapsed().as_secs_f64()
    );

    let (chooser_total, linear_total) = (0..args.episodes)
        .map(|_| {
            (
                run_chooser(&chooser, args.draws, &mut rng),
                run_linear(&items, args.draws, &mut rng),
            )
        })
        .fold((0.0, 0.0), |acc, (c, l)| (acc.0 + c, acc.1 + l));
    let picks = (args.episodes * args.draws) as f64;
    println!("---");
    println!("Average chooser picks per second: {:.2}", picks / chooser_total);
    println!("Average linear picks per second: {:.2}", picks / linear_total);
}
