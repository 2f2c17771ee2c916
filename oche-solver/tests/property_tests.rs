//! Property-based tests for the checkout solver.
//!
//! These tests use `proptest` to assert invariants that must hold for every
//! target score, complementing the example-based unit tests and the BDD
//! scenarios.
//!
//! # Invariants tested
//!
//! - **Exact finish:** Every route sums to the target.
//! - **Double out:** Every route ends on a double or the bullseye.
//! - **Bounded:** At most five routes of at most three darts.
//! - **Unique:** No two routes throw the same darts in a different order.
//! - **Treble economy:** Multi-treble routes only appear when no route with
//!   at most one treble exists.
//! - **Ranked:** Costs never decrease along the result.
//! - **Shortest:** All routes share one length.

use std::collections::HashSet;

use oche_core::{CheckoutFinder, CostWeights};
use oche_solver::{BacktrackingSolver, CachedSolver, MAX_CHECKOUT};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: every route finishes exactly on the target with a double out.
    #[test]
    fn routes_finish_exactly_on_a_double(target in 0_u16..=200) {
        let outs = BacktrackingSolver::new().find(target);
        for checkout in &outs {
            prop_assert_eq!(checkout.total(), target);
            prop_assert!(checkout.is_double_out(), "{checkout} does not double out");
        }
    }

    /// Property: the result respects the dart and result limits.
    #[test]
    fn result_is_bounded(target in 0_u16..=MAX_CHECKOUT) {
        let outs = BacktrackingSolver::new().find(target);
        prop_assert!(outs.len() <= 5);
        prop_assert!(outs.iter().all(|checkout| (1..=3).contains(&checkout.len())));
    }

    /// Property: no two routes are reorderings of each other.
    #[test]
    fn routes_are_unique_as_multisets(target in 2_u16..=MAX_CHECKOUT) {
        let outs = BacktrackingSolver::new().find(target);
        let keys: HashSet<String> = outs.iter().map(|checkout| checkout.key()).collect();
        prop_assert_eq!(keys.len(), outs.len());
    }

    /// Property: a result mixing treble counts never contains a multi-treble
    /// route.
    #[test]
    fn multi_treble_routes_only_when_unavoidable(target in 2_u16..=MAX_CHECKOUT) {
        let outs = BacktrackingSolver::new().find(target);
        let has_economical = outs.iter().any(|checkout| checkout.triple_count() <= 1);
        if has_economical {
            prop_assert!(outs.iter().all(|checkout| checkout.triple_count() <= 1));
        }
    }

    /// Property: routes are sorted by ascending cost and share one length.
    #[test]
    fn routes_are_ranked_and_equally_short(target in 2_u16..=MAX_CHECKOUT) {
        let weights = CostWeights::default();
        let outs = BacktrackingSolver::new().find(target);
        let costs: Vec<u32> = outs.iter().map(|checkout| weights.checkout_cost(checkout)).collect();
        prop_assert!(costs.windows(2).all(|pair| pair.first() <= pair.last()));
        let lengths: HashSet<usize> = outs.iter().map(oche_core::Checkout::len).collect();
        prop_assert!(lengths.len() <= 1);
    }

    /// Property: targets above the three-dart maximum never finish.
    #[test]
    fn targets_above_maximum_are_empty(target in (MAX_CHECKOUT + 1)..=u16::MAX) {
        prop_assert!(BacktrackingSolver::new().find(target).is_empty());
    }

    /// Property: caching never changes an answer.
    #[test]
    fn cached_answers_match_direct_answers(target in 0_u16..=MAX_CHECKOUT) {
        let direct = BacktrackingSolver::new();
        let cached = CachedSolver::new(BacktrackingSolver::new());
        let first = cached.find(target);
        prop_assert_eq!(&first, &direct.find(target));
        prop_assert_eq!(cached.find(target), first);
    }
}
