//! Per-player score accounting for a leg.
//!
//! A [`Player`] records darts in throw order and derives the remaining
//! score and average from them. Rule enforcement such as bust detection
//! belongs to whoever drives the match.

use crate::{Checkout, CheckoutFinder, Dart};

/// Starting score of a standard leg.
pub const DEFAULT_BASE_SCORE: u16 = 501;

/// A competitor and the darts thrown in the current leg.
///
/// # Examples
///
/// ```
/// use oche_core::{Dart, Player};
///
/// # fn main() -> Result<(), oche_core::DartError> {
/// let mut player = Player::with_default_base(1, "Phil");
/// player.add_dart(Dart::triple(20)?);
/// player.add_dart(Dart::triple(20)?);
/// player.add_dart(Dart::double(20)?);
/// assert_eq!(player.remaining_score(), 341);
/// assert_eq!(player.average(), 53);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    id: u64,
    name: String,
    base_score: u16,
    darts: Vec<Dart>,
    legs_won: u32,
}

impl Player {
    /// Create a player starting each leg on `base_score`.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, base_score: u16) -> Self {
        Self {
            id,
            name: name.into(),
            base_score,
            darts: Vec::new(),
            legs_won: 0,
        }
    }

    /// Create a player for a standard 501 leg.
    #[must_use]
    pub fn with_default_base(id: u64, name: impl Into<String>) -> Self {
        Self::new(id, name, DEFAULT_BASE_SCORE)
    }

    /// Player identifier.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Score the leg started from.
    #[must_use]
    pub const fn base_score(&self) -> u16 {
        self.base_score
    }

    /// Darts thrown so far, oldest first.
    #[must_use]
    pub fn darts(&self) -> &[Dart] {
        &self.darts
    }

    /// Number of darts thrown so far.
    #[must_use]
    pub fn dart_count(&self) -> usize {
        self.darts.len()
    }

    /// Legs won in the match.
    #[must_use]
    pub const fn legs_won(&self) -> u32 {
        self.legs_won
    }

    /// Record a thrown dart. No rules are checked here.
    pub fn add_dart(&mut self, dart: Dart) {
        self.darts.push(dart);
    }

    /// Count a won leg.
    pub const fn record_leg_won(&mut self) {
        self.legs_won = self.legs_won.saturating_add(1);
    }

    /// Points scored in the leg so far.
    #[must_use]
    pub fn points_scored(&self) -> u32 {
        self.darts.iter().map(|dart| u32::from(dart.value())).sum()
    }

    /// Base score minus points scored.
    ///
    /// The result is not clamped and goes negative if an overshooting dart
    /// was recorded.
    #[must_use]
    pub fn remaining_score(&self) -> i32 {
        let scored = i64::from(self.points_scored());
        let remaining = i64::from(self.base_score) - scored;
        i32::try_from(remaining).unwrap_or(i32::MIN)
    }

    /// Points per dart, rounded half up. Zero before the first dart.
    #[must_use]
    pub fn average(&self) -> u32 {
        let Ok(count) = u32::try_from(self.darts.len()) else {
            return 0;
        };
        if count == 0 {
            return 0;
        }
        round_half_up(self.points_scored(), count)
    }

    /// Checkouts for the current remaining score, best first.
    ///
    /// Returns an empty list when the score is negative or has no finish.
    #[must_use]
    pub fn possible_outs<F>(&self, finder: &F) -> Vec<Checkout>
    where
        F: CheckoutFinder + ?Sized,
    {
        u16::try_from(self.remaining_score())
            .map_or_else(|_| Vec::new(), |target| finder.find(target))
    }
}

#[expect(
    clippy::integer_division,
    reason = "rounded integer mean is computed without floating point"
)]
fn round_half_up(total: u32, count: u32) -> u32 {
    let doubled = u64::from(total) * 2 + u64::from(count);
    let divisor = u64::from(count) * 2;
    u32::try_from(doubled / divisor).unwrap_or(u32::MAX)
}
