//! Test-only [`CheckoutFinder`] implementations used by unit and behaviour
//! tests.

use std::sync::{Mutex, PoisonError};

use crate::{Checkout, CheckoutFinder};

/// `CheckoutFinder` returning a canned answer for every target.
///
/// Each requested target is recorded so tests can assert how the finder
/// was consulted.
#[derive(Debug, Default)]
pub struct FixedFinder {
    checkouts: Vec<Checkout>,
    requested: Mutex<Vec<u16>>,
}

impl FixedFinder {
    /// Create a finder that always answers with `checkouts`.
    #[must_use]
    pub fn new(checkouts: Vec<Checkout>) -> Self {
        Self {
            checkouts,
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Targets requested so far, in call order.
    #[must_use]
    pub fn requested_targets(&self) -> Vec<u16> {
        self.requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl CheckoutFinder for FixedFinder {
    fn find(&self, target: u16) -> Vec<Checkout> {
        self.requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(target);
        self.checkouts.clone()
    }
}

/// `CheckoutFinder` that never finds a finish.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoCheckoutFinder;

impl CheckoutFinder for NoCheckoutFinder {
    fn find(&self, _target: u16) -> Vec<Checkout> {
        Vec::new()
    }
}
