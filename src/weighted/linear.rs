use super::random::RandomSource;

///
/// Picks from `items` with a single linear scan and no preprocessing.
///
/// Each call sums the weights and walks the list, so it is O(n) per pick.
/// Returns `None` when there is nothing to pick (empty, or all weights 0).
///
pub fn weighted_random<'a, T, R: RandomSource + ?Sized>(
    items: &'a [(T, u32)],
    rng: &mut R,
) -> Option<&'a T> {
    let total_weight: u64 = items.iter().map(|(_, weight)| *weight as u64).sum();
    if total_weight == 0 {
        return None;
    }
    let random = rng.below(total_weight);
    let mut current_weight = 0;
    for (item, weight) in items {
        current_weight += *weight as u64;
        if current_weight > random {
            return Some(item);
        }
    }
    unreachable!()
}
