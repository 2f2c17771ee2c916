//! Checkout search for Oche.
//!
//! This crate provides [`BacktrackingSolver`], the default implementation of
//! the [`CheckoutFinder`](oche_core::CheckoutFinder) trait. It enumerates
//! every dart sequence of up to three darts that finishes on a double or the
//! bullseye, then deduplicates, filters and ranks the candidates so callers
//! see the few easiest routes first.
//!
//! The search is a pure function of the target score, so [`CachedSolver`]
//! can wrap any finder and memoise its answers per target.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod cache;
mod pipeline;
mod search;
mod solver;

pub use cache::CachedSolver;
pub use solver::{BacktrackingSolver, MAX_CHECKOUT, SearchDiagnostics, SolverConfig};
