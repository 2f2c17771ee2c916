//! Memoising wrapper around any [`CheckoutFinder`].

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use oche_core::{Checkout, CheckoutFinder};

/// Caches the answer of an inner finder per target score.
///
/// Checkout searches depend on nothing but the target, so each target is
/// searched at most once for the lifetime of the cache.
///
/// # Examples
///
/// ```
/// use oche_core::CheckoutFinder;
/// use oche_solver::{BacktrackingSolver, CachedSolver};
///
/// let solver = CachedSolver::new(BacktrackingSolver::new());
/// let first = solver.find(100);
/// assert_eq!(solver.find(100), first);
/// assert_eq!(solver.cached_targets(), vec![100]);
/// ```
#[derive(Debug, Default)]
pub struct CachedSolver<F> {
    inner: F,
    cache: RwLock<HashMap<u16, Vec<Checkout>>>,
}

impl<F: CheckoutFinder> CachedSolver<F> {
    /// Wrap `inner` with an empty cache.
    #[must_use]
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// The wrapped finder.
    #[must_use]
    pub const fn inner(&self) -> &F {
        &self.inner
    }

    /// Targets answered so far, ascending.
    #[must_use]
    pub fn cached_targets(&self) -> Vec<u16> {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        let mut targets: Vec<u16> = cache.keys().copied().collect();
        targets.sort_unstable();
        targets
    }

    /// Forget every cached answer.
    pub fn clear(&self) {
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl<F: CheckoutFinder> CheckoutFinder for CachedSolver<F> {
    fn find(&self, target: u16) -> Vec<Checkout> {
        if let Some(hit) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&target)
        {
            log::trace!("checkout cache hit for {target}");
            return hit.clone();
        }

        let computed = self.inner.find(target);
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(target)
            .or_insert_with(|| computed.clone());
        computed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oche_core::Dart;
    use oche_core::test_support::FixedFinder;
    use rstest::rstest;

    #[rstest]
    fn inner_finder_runs_once_per_target() {
        let checkout = Checkout::new(vec![Dart::double(20).expect("valid dart")]);
        let solver = CachedSolver::new(FixedFinder::new(vec![checkout.clone()]));

        assert_eq!(solver.find(40), vec![checkout.clone()]);
        assert_eq!(solver.find(40), vec![checkout]);
        let _ = solver.find(32);

        assert_eq!(solver.inner().requested_targets(), vec![40, 32]);
        assert_eq!(solver.cached_targets(), vec![32, 40]);
    }

    #[rstest]
    fn clear_forgets_answers() {
        let solver = CachedSolver::new(FixedFinder::default());
        let _ = solver.find(3);
        solver.clear();
        assert!(solver.cached_targets().is_empty());
        let _ = solver.find(3);
        assert_eq!(solver.inner().requested_targets(), vec![3, 3]);
    }
}
