//! Station identifier types.

use std::fmt;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

impl InvalidStationId {
    pub(crate) fn empty() -> Self {
        Self {
            reason: EMPTY_REASON,
        }
    }

    /// Whether the input was empty rather than malformed.
    pub fn is_empty_input(&self) -> bool {
        self.reason == EMPTY_REASON
    }
}

const EMPTY_REASON: &str = "must not be empty";

/// A numeric station identifier.
///
/// # Examples
///
/// ```
/// use train_finder::domain::StationId;
///
/// let id = StationId::parse("1902").unwrap();
/// assert_eq!(id.get(), 1902);
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("Kyiv").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(i64);

impl StationId {
    /// Create a station id from a raw number.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Parse a station id from user input.
    ///
    /// Accepts an optional sign followed by decimal digits.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId::empty());
        }

        s.parse::<i64>().map(Self).map_err(|_| InvalidStationId {
            reason: "must be an integer",
        })
    }

    /// Returns the raw numeric id.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
