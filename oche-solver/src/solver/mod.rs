//! `BacktrackingSolver` implementation.
//!
//! Runs the candidate search and the filtering pipeline for one target.

use oche_core::{Checkout, CheckoutFinder, CostWeights, Dart};

use crate::pipeline;
use crate::search::CandidateSearch;

/// Highest score that can be checked out with three darts (T20 T20 BULLSEYE).
pub const MAX_CHECKOUT: u16 = 170;

/// Highest score a single dart can take.
const MAX_DART_VALUE: u16 = 60;

/// Configuration for [`BacktrackingSolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Longest route considered, in darts.
    pub max_darts: usize,
    /// Upper bound on the number of ranked routes returned.
    pub max_results: usize,
    /// Per-dart difficulty used for ranking.
    pub cost_weights: CostWeights,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_darts: 3,
            max_results: 5,
            cost_weights: CostWeights::default(),
        }
    }
}

impl SolverConfig {
    /// Highest target that can be finished within `max_darts`.
    ///
    /// Every dart but the last can take a treble twenty; the last can take
    /// at most the bullseye. Equals [`MAX_CHECKOUT`] for three darts.
    #[must_use]
    pub fn max_checkout(&self) -> u16 {
        let Some(setup_darts) = self.max_darts.checked_sub(1) else {
            return 0;
        };
        u16::try_from(setup_darts)
            .ok()
            .and_then(|darts| darts.checked_mul(MAX_DART_VALUE))
            .and_then(|setup| setup.checked_add(Dart::BULLSEYE.value()))
            .unwrap_or(u16::MAX)
    }
}

/// Counts collected while searching one target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchDiagnostics {
    /// Raw finishing sequences produced by the backtracking search.
    pub candidates_generated: usize,
    /// Sequences discarded as reorderings of an earlier route.
    pub duplicates_removed: usize,
    /// Routes left after the treble and length filters, before truncation.
    pub routes_ranked: usize,
}

/// Exhaustive checkout search over every dart on the board.
///
/// For a target it enumerates all routes of up to
/// [`SolverConfig::max_darts`] darts that finish on a double or the
/// bullseye, removes reorderings of the same darts, prefers routes with at
/// most one treble, keeps the shortest routes and ranks them by
/// [`CostWeights`].
///
/// # Examples
///
/// ```
/// use oche_core::CheckoutFinder;
/// use oche_solver::BacktrackingSolver;
///
/// let solver = BacktrackingSolver::new();
/// let outs = solver.find(40);
/// assert_eq!(outs.first().map(ToString::to_string).as_deref(), Some("D20"));
/// assert!(solver.find(171).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BacktrackingSolver {
    config: SolverConfig,
    search: CandidateSearch,
}

impl Default for BacktrackingSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl BacktrackingSolver {
    /// Construct a solver using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub fn with_config(config: SolverConfig) -> Self {
        let search = CandidateSearch::new(config.max_darts);
        Self { config, search }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Raw finishing sequences for `target` in generation order.
    ///
    /// No deduplication or ranking is applied.
    #[must_use]
    pub fn candidates(&self, target: u16) -> Vec<Checkout> {
        if target > self.config.max_checkout() {
            return Vec::new();
        }
        self.search.collect(target)
    }

    /// Ranked checkouts for `target` together with search counts.
    #[must_use]
    pub fn search_with_diagnostics(&self, target: u16) -> (Vec<Checkout>, SearchDiagnostics) {
        let mut routes = self.candidates(target);
        let mut diagnostics = SearchDiagnostics {
            candidates_generated: routes.len(),
            ..SearchDiagnostics::default()
        };

        pipeline::retain_double_outs(&mut routes);
        diagnostics.duplicates_removed = pipeline::dedup_by_darts(&mut routes);
        pipeline::drop_multi_triples(&mut routes);
        pipeline::keep_shortest(&mut routes);
        diagnostics.routes_ranked = routes.len();
        pipeline::rank(
            &mut routes,
            &self.config.cost_weights,
            self.config.max_results,
        );

        log::debug!(
            "checkout search for {target}: {} candidates, {} duplicates, {} ranked, {} returned",
            diagnostics.candidates_generated,
            diagnostics.duplicates_removed,
            diagnostics.routes_ranked,
            routes.len()
        );
        (routes, diagnostics)
    }
}

impl CheckoutFinder for BacktrackingSolver {
    fn find(&self, target: u16) -> Vec<Checkout> {
        self.search_with_diagnostics(target).0
    }
}
