//! Core domain types for the Oche darts engine.
//!
//! These models keep scoring honest for downstream components:
//! [`Dart`] constructors return `Result` so a multiplied bull is rejected
//! early, [`Player`] derives its remaining score from recorded darts, and
//! [`CheckoutFinder`] is the seam through which checkout searches plug in.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod checkout;
pub mod dart;
pub mod player;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use checkout::{Checkout, CheckoutFinder, CostWeights};
pub use dart::{
    BULL_FACE, BULLSEYE_FACE, Dart, DartError, DartParseError, MAX_SEGMENT, Multiplier,
};
pub use player::{DEFAULT_BASE_SCORE, Player};
