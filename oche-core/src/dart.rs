//! Single dart throws.
//!
//! A [`Dart`] pairs a board face with a [`Multiplier`]. Construction is
//! validated so a multiplied bull can never exist.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Highest numbered segment on the board.
pub const MAX_SEGMENT: u8 = 20;
/// Face value of the outer bull.
pub const BULL_FACE: u8 = 25;
/// Face value of the bullseye.
pub const BULLSEYE_FACE: u8 = 50;

/// Ring a dart landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Multiplier {
    /// Plain segment, scored at face value.
    #[default]
    Single,
    /// Outer double ring.
    Double,
    /// Inner treble ring.
    Triple,
}

impl Multiplier {
    /// Every multiplier in search order.
    pub const ALL: [Self; 3] = [Self::Single, Self::Double, Self::Triple];

    /// Factor applied to a numbered segment.
    #[must_use]
    pub const fn factor(self) -> u16 {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
        }
    }

    /// Prefix used in dart names.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Single => "",
            Self::Double => "D",
            Self::Triple => "T",
        }
    }
}

/// Errors returned by [`Dart::new`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DartError {
    /// The face is not a segment on the board.
    #[error("{face} is not a dartboard face (expected 1-20, 25 or 50)")]
    InvalidFace {
        /// Rejected face value.
        face: u8,
    },
    /// A bull was paired with a double or triple.
    #[error("face {face} cannot carry a {multiplier:?} multiplier")]
    MultipliedBull {
        /// Bull face value (25 or 50).
        face: u8,
        /// Rejected multiplier.
        multiplier: Multiplier,
    },
}

/// A single thrown dart.
///
/// # Examples
///
/// ```
/// use oche_core::{Dart, Multiplier};
///
/// # fn main() -> Result<(), oche_core::DartError> {
/// let dart = Dart::new(20, Multiplier::Triple)?;
/// assert_eq!(dart.value(), 60);
/// assert_eq!(dart.display_name(), "T20");
/// assert_eq!(Dart::BULLSEYE.display_name(), "BULLSEYE");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct Dart {
    face: u8,
    multiplier: Multiplier,
}

impl Dart {
    /// The outer bull, worth 25.
    pub const BULL: Self = Self {
        face: BULL_FACE,
        multiplier: Multiplier::Single,
    };

    /// The bullseye, worth 50. It finishes a leg like a double.
    pub const BULLSEYE: Self = Self {
        face: BULLSEYE_FACE,
        multiplier: Multiplier::Single,
    };

    /// Validates and constructs a [`Dart`].
    pub const fn new(face: u8, multiplier: Multiplier) -> Result<Self, DartError> {
        match face {
            1..=MAX_SEGMENT => Ok(Self { face, multiplier }),
            BULL_FACE | BULLSEYE_FACE => match multiplier {
                Multiplier::Single => Ok(Self { face, multiplier }),
                Multiplier::Double | Multiplier::Triple => {
                    Err(DartError::MultipliedBull { face, multiplier })
                }
            },
            _ => Err(DartError::InvalidFace { face }),
        }
    }

    /// A dart in the single ring of `face`.
    pub const fn single(face: u8) -> Result<Self, DartError> {
        Self::new(face, Multiplier::Single)
    }

    /// A dart in the double ring of `face`.
    pub const fn double(face: u8) -> Result<Self, DartError> {
        Self::new(face, Multiplier::Double)
    }

    /// A dart in the treble ring of `face`.
    pub const fn triple(face: u8) -> Result<Self, DartError> {
        Self::new(face, Multiplier::Triple)
    }

    /// Every distinct dart in search order.
    ///
    /// Numbered faces come first in ascending order, each as single, double
    /// and triple, followed by the bull and the bullseye.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=MAX_SEGMENT)
            .flat_map(|face| {
                Multiplier::ALL
                    .into_iter()
                    .map(move |multiplier| Self { face, multiplier })
            })
            .chain([Self::BULL, Self::BULLSEYE])
    }

    /// Face value the dart landed on.
    #[must_use]
    pub const fn face(self) -> u8 {
        self.face
    }

    /// Ring the dart landed in.
    #[must_use]
    pub const fn multiplier(self) -> Multiplier {
        self.multiplier
    }

    /// Whether this is the outer bull or the bullseye.
    #[must_use]
    pub const fn is_bull(self) -> bool {
        self.face > MAX_SEGMENT
    }

    /// Points scored by the dart.
    #[must_use]
    pub const fn value(self) -> u16 {
        if self.is_bull() {
            return self.face as u16;
        }
        self.face as u16 * self.multiplier.factor()
    }

    /// Whether the dart may end a leg under the double-out rule.
    #[must_use]
    pub const fn is_checkout_capable(self) -> bool {
        matches!(self.multiplier, Multiplier::Double) || self.face == BULLSEYE_FACE
    }

    /// Name shown to players, e.g. `T20`, `D16`, `7` or `BULL`.
    #[must_use]
    pub fn display_name(self) -> String {
        match self.face {
            BULL_FACE => "BULL".to_owned(),
            BULLSEYE_FACE => "BULLSEYE".to_owned(),
            face => format!("{}{face}", self.multiplier.prefix()),
        }
    }
}

impl fmt::Display for Dart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// Errors returned when parsing a [`Dart`] from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DartParseError {
    /// The input was blank.
    #[error("dart notation is empty")]
    Empty,
    /// The segment number could not be read.
    #[error("{input:?} is not valid dart notation")]
    InvalidNumber {
        /// Offending input.
        input: String,
    },
    /// The notation named a dart that cannot exist.
    #[error(transparent)]
    Invalid(#[from] DartError),
}

impl FromStr for Dart {
    type Err = DartParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let notation = s.trim().to_ascii_uppercase();
        if notation.is_empty() {
            return Err(DartParseError::Empty);
        }
        match notation.as_str() {
            "BULL" | "SB" => return Ok(Self::BULL),
            "BULLSEYE" | "DB" => return Ok(Self::BULLSEYE),
            _ => {}
        }

        let (multiplier, digits) = if let Some(rest) = notation.strip_prefix('T') {
            (Multiplier::Triple, rest)
        } else if let Some(rest) = notation.strip_prefix('D') {
            (Multiplier::Double, rest)
        } else if let Some(rest) = notation.strip_prefix('S') {
            (Multiplier::Single, rest)
        } else {
            (Multiplier::Single, notation.as_str())
        };

        let face = digits
            .parse::<u8>()
            .map_err(|_| DartParseError::InvalidNumber {
                input: s.to_owned(),
            })?;
        Ok(Self::new(face, multiplier)?)
    }
}

impl From<Dart> for String {
    fn from(dart: Dart) -> Self {
        dart.display_name()
    }
}

impl TryFrom<String> for Dart {
    type Error = DartParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
