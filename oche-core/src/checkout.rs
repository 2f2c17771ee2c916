//! Finishing routes and the trait used to search for them.
//!
//! A [`Checkout`] is an ordered run of one or more darts that reduces a
//! remaining score to exactly zero. [`CheckoutFinder`] is the boundary
//! between score accounting and the search implementations.

use std::fmt;

use crate::{Dart, Multiplier};

/// An ordered sequence of darts that finishes a leg.
///
/// # Examples
///
/// ```
/// use oche_core::{Checkout, Dart};
///
/// # fn main() -> Result<(), oche_core::DartError> {
/// let checkout = Checkout::new(vec![Dart::triple(20)?, Dart::double(16)?]);
/// assert_eq!(checkout.total(), 92);
/// assert!(checkout.is_double_out());
/// assert_eq!(checkout.to_string(), "T20 D16");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Checkout {
    darts: Vec<Dart>,
}

impl Checkout {
    /// Wrap darts in throw order.
    #[must_use]
    pub const fn new(darts: Vec<Dart>) -> Self {
        Self { darts }
    }

    /// Darts in throw order.
    #[must_use]
    pub fn darts(&self) -> &[Dart] {
        &self.darts
    }

    /// Number of darts in the route.
    #[must_use]
    pub fn len(&self) -> usize {
        self.darts.len()
    }

    /// Whether the route holds no darts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.darts.is_empty()
    }

    /// Sum of the dart values.
    #[must_use]
    pub fn total(&self) -> u16 {
        self.darts.iter().map(|dart| dart.value()).sum()
    }

    /// Last dart of the route, if any.
    #[must_use]
    pub fn finishing_dart(&self) -> Option<Dart> {
        self.darts.last().copied()
    }

    /// Number of treble darts in the route.
    #[must_use]
    pub fn triple_count(&self) -> usize {
        self.darts
            .iter()
            .filter(|dart| dart.multiplier() == Multiplier::Triple)
            .count()
    }

    /// Whether the route ends on a double or the bullseye.
    #[must_use]
    pub fn is_double_out(&self) -> bool {
        self.finishing_dart()
            .is_some_and(|dart| dart.is_checkout_capable())
    }

    /// Order-independent identity of the route.
    ///
    /// Two routes throwing the same darts in a different order share a key.
    #[must_use]
    pub fn key(&self) -> String {
        let mut names: Vec<String> = self.darts.iter().map(|dart| dart.display_name()).collect();
        names.sort_unstable();
        names.join(",")
    }
}

impl fmt::Display for Checkout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut darts = self.darts.iter();
        if let Some(first) = darts.next() {
            write!(f, "{first}")?;
        }
        for dart in darts {
            write!(f, " {dart}")?;
        }
        Ok(())
    }
}

impl From<Vec<Dart>> for Checkout {
    fn from(darts: Vec<Dart>) -> Self {
        Self::new(darts)
    }
}

/// Throw-difficulty weights used to rank checkouts.
///
/// Lower totals are easier routes. The defaults treat a single as the
/// easiest target and either bull as the hardest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostWeights {
    /// Cost of a dart in a single segment.
    pub single: u32,
    /// Cost of a dart in the double ring.
    pub double: u32,
    /// Cost of a dart in the treble ring.
    pub triple: u32,
    /// Cost of the outer bull or the bullseye.
    pub bull: u32,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            single: 1,
            double: 3,
            triple: 4,
            bull: 5,
        }
    }
}

impl CostWeights {
    /// Cost of throwing `dart`.
    #[must_use]
    pub const fn dart_cost(&self, dart: Dart) -> u32 {
        match dart.multiplier() {
            Multiplier::Triple => self.triple,
            Multiplier::Double => self.double,
            Multiplier::Single if dart.is_bull() => self.bull,
            Multiplier::Single => self.single,
        }
    }

    /// Summed cost of every dart in `checkout`.
    #[must_use]
    pub fn checkout_cost(&self, checkout: &Checkout) -> u32 {
        checkout
            .darts()
            .iter()
            .map(|dart| self.dart_cost(*dart))
            .sum()
    }
}

/// Find ranked checkouts for a remaining score.
///
/// Implementations are total: a score with no finish yields an empty
/// vector rather than an error. Finders must be `Send + Sync` so they can
/// be shared between threads.
///
/// # Examples
///
/// ```rust
/// use oche_core::{Checkout, CheckoutFinder, Dart};
///
/// struct BullseyeOnly;
///
/// impl CheckoutFinder for BullseyeOnly {
///     fn find(&self, target: u16) -> Vec<Checkout> {
///         if target == 50 {
///             vec![Checkout::new(vec![Dart::BULLSEYE])]
///         } else {
///             Vec::new()
///         }
///     }
/// }
///
/// assert_eq!(BullseyeOnly.find(50).len(), 1);
/// assert!(BullseyeOnly.find(40).is_empty());
/// ```
pub trait CheckoutFinder: Send + Sync {
    /// Return checkouts for `target`, best first.
    fn find(&self, target: u16) -> Vec<Checkout>;
}

impl<F: CheckoutFinder + ?Sized> CheckoutFinder for &F {
    fn find(&self, target: u16) -> Vec<Checkout> {
        (**self).find(target)
    }
}

impl<F: CheckoutFinder + ?Sized> CheckoutFinder for Box<F> {
    fn find(&self, target: u16) -> Vec<Checkout> {
        (**self).find(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn big_fish() -> Checkout {
        let t20 = Dart::triple(20).expect("valid dart");
        Checkout::new(vec![t20, t20, Dart::BULLSEYE])
    }

    #[rstest]
    fn totals_and_counts(big_fish: Checkout) {
        assert_eq!(big_fish.total(), 170);
        assert_eq!(big_fish.len(), 3);
        assert_eq!(big_fish.triple_count(), 2);
        assert_eq!(big_fish.finishing_dart(), Some(Dart::BULLSEYE));
        assert!(big_fish.is_double_out());
    }

    #[rstest]
    fn key_ignores_throw_order() {
        let d10 = Dart::double(10).expect("valid dart");
        let s20 = Dart::single(20).expect("valid dart");
        let forward = Checkout::new(vec![s20, d10]);
        let reverse = Checkout::new(vec![d10, s20]);
        assert_eq!(forward.key(), reverse.key());
        assert_eq!(forward.key(), "20,D10");
    }

    #[rstest]
    fn single_ending_is_not_double_out() {
        let checkout = Checkout::new(vec![Dart::single(20).expect("valid dart")]);
        assert!(!checkout.is_double_out());
        assert!(!Checkout::new(Vec::new()).is_double_out());
    }

    #[rstest]
    #[case(Dart::triple(19).expect("valid dart"), 4)]
    #[case(Dart::double(20).expect("valid dart"), 3)]
    #[case(Dart::BULL, 5)]
    #[case(Dart::BULLSEYE, 5)]
    #[case(Dart::single(3).expect("valid dart"), 1)]
    fn default_dart_costs(#[case] dart: Dart, #[case] cost: u32) {
        assert_eq!(CostWeights::default().dart_cost(dart), cost);
    }

    #[rstest]
    fn checkout_cost_sums_darts(big_fish: Checkout) {
        assert_eq!(CostWeights::default().checkout_cost(&big_fish), 13);
    }

    #[rstest]
    fn displays_space_separated(big_fish: Checkout) {
        assert_eq!(big_fish.to_string(), "T20 T20 BULLSEYE");
    }
}
