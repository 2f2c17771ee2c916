//! Facade crate for the Oche darts engine.
//!
//! This crate re-exports the core domain types and, behind the `solver`
//! feature, the default checkout search.
//!
//! ```
//! use oche::{Dart, Player, compute_checkout_combinations};
//!
//! # fn main() -> Result<(), oche::DartError> {
//! let mut player = Player::new(1, "Rob", 100);
//! player.add_dart(Dart::triple(20)?);
//! assert_eq!(player.remaining_score(), 40);
//! assert_eq!(compute_checkout_combinations(40).len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use oche_core::{
    Checkout, CheckoutFinder, CostWeights, DEFAULT_BASE_SCORE, Dart, DartError, DartParseError,
    Multiplier, Player,
};

#[cfg(feature = "solver")]
pub use oche_solver::{
    BacktrackingSolver, CachedSolver, MAX_CHECKOUT, SearchDiagnostics, SolverConfig,
};

/// Up to five easiest checkouts for `target`, using the default solver.
///
/// Returns an empty list when `target` cannot be finished in three darts.
#[cfg(feature = "solver")]
#[must_use]
pub fn compute_checkout_combinations(target: u16) -> Vec<Checkout> {
    BacktrackingSolver::new().find(target)
}
