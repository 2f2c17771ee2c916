//! Post-processing stages applied to raw candidates.
//!
//! Each stage preserves the relative order of the routes it keeps.

use std::collections::HashSet;

use oche_core::{Checkout, CostWeights};

/// Keep routes that end on a double or the bullseye.
pub(crate) fn retain_double_outs(candidates: &mut Vec<Checkout>) {
    candidates.retain(Checkout::is_double_out);
}

/// Keep the first route for each set of darts, ignoring throw order.
///
/// Returns the number of duplicates dropped.
pub(crate) fn dedup_by_darts(candidates: &mut Vec<Checkout>) -> usize {
    let before = candidates.len();
    let mut seen = HashSet::with_capacity(before);
    candidates.retain(|checkout| seen.insert(checkout.key()));
    before - candidates.len()
}

/// Drop routes that need more than one treble.
///
/// When every route needs several trebles they are all kept, since those
/// are the only ways to finish.
pub(crate) fn drop_multi_triples(candidates: &mut Vec<Checkout>) {
    if candidates.iter().any(|checkout| checkout.triple_count() <= 1) {
        candidates.retain(|checkout| checkout.triple_count() <= 1);
    }
}

/// Keep only routes using the fewest darts.
pub(crate) fn keep_shortest(candidates: &mut Vec<Checkout>) {
    let Some(shortest) = candidates.iter().map(Checkout::len).min() else {
        return;
    };
    candidates.retain(|checkout| checkout.len() == shortest);
}

/// Stable sort by ascending cost, then truncate to `limit`.
pub(crate) fn rank(candidates: &mut Vec<Checkout>, weights: &CostWeights, limit: usize) {
    candidates.sort_by_key(|checkout| weights.checkout_cost(checkout));
    candidates.truncate(limit);
}
