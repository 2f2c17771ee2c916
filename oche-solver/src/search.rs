//! Depth-bounded backtracking over the dart move set.

use oche_core::{Checkout, Dart};

/// Enumerates raw finishing sequences for a target score.
///
/// Sequences are produced in generation order: the move set is walked in
/// [`Dart::all`] order at every ply, so later pipeline stages that keep the
/// first occurrence of a route are deterministic.
#[derive(Debug, Clone)]
pub(crate) struct CandidateSearch {
    moves: Vec<Dart>,
    max_darts: usize,
}

impl CandidateSearch {
    pub(crate) fn new(max_darts: usize) -> Self {
        Self {
            moves: Dart::all().collect(),
            max_darts,
        }
    }

    /// Every sequence of at most `max_darts` darts summing to `target` whose
    /// final dart is a double or the bullseye.
    pub(crate) fn collect(&self, target: u16) -> Vec<Checkout> {
        let mut working = Vec::with_capacity(self.max_darts);
        let mut found = Vec::new();
        self.extend(target, &mut working, &mut found);
        found
    }

    fn extend(&self, remaining: u16, working: &mut Vec<Dart>, found: &mut Vec<Checkout>) {
        if remaining == 0 {
            // A zero target never grows further; only a legal finish is kept.
            if working.last().is_some_and(|dart| dart.is_checkout_capable()) {
                found.push(Checkout::new(working.clone()));
            }
            return;
        }
        if working.len() >= self.max_darts {
            return;
        }
        for dart in &self.moves {
            let Some(next) = remaining.checked_sub(dart.value()) else {
                continue;
            };
            working.push(*dart);
            self.extend(next, working, found);
            working.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn zero_target_yields_nothing() {
        assert!(CandidateSearch::new(3).collect(0).is_empty());
    }

    #[rstest]
    fn two_only_finishes_on_double_one() {
        let routes: Vec<String> = CandidateSearch::new(3)
            .collect(2)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(routes, vec!["D1".to_owned()]);
    }

    #[rstest]
    fn four_is_generated_in_move_order() {
        let routes: Vec<String> = CandidateSearch::new(3)
            .collect(4)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            routes,
            vec![
                "1 1 D1".to_owned(),
                "D1 D1".to_owned(),
                "2 D1".to_owned(),
                "D2".to_owned(),
            ]
        );
    }

    #[rstest]
    fn depth_bound_limits_route_length() {
        let search = CandidateSearch::new(1);
        assert!(search.collect(4).iter().all(|route| route.len() == 1));
        assert!(search.collect(3).is_empty());
    }

    #[rstest]
    fn three_dart_finish_is_accepted_at_the_depth_bound() {
        let routes = CandidateSearch::new(3).collect(170);
        assert_eq!(routes.len(), 1);
        assert_eq!(
            routes.first().map(ToString::to_string).as_deref(),
            Some("T20 T20 BULLSEYE")
        );
    }
}
