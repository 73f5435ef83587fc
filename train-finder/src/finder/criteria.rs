//! Ranking criteria for matching trains.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::Train;

/// Error returned for a criterion name that is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported criteria {0:?}")]
pub struct UnknownCriteria(pub String);

/// The field used to rank matching trains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criteria {
    /// Cheapest first.
    Price,
    /// Earliest arrival first.
    ArrivalTime,
    /// Earliest departure first.
    DepartureTime,
}

impl Criteria {
    /// All criteria, in the order they are listed to users.
    pub const ALL: [Criteria; 3] = [
        Criteria::Price,
        Criteria::ArrivalTime,
        Criteria::DepartureTime,
    ];

    /// The name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Criteria::Price => "price",
            Criteria::ArrivalTime => "arrival-time",
            Criteria::DepartureTime => "departure-time",
        }
    }

    /// Compare two trains by this criterion, ascending.
    ///
    /// Equal keys compare `Equal`, so a stable sort keeps their input order.
    /// Prices must be finite; a NaN price compares equal to everything.
    pub fn compare(&self, a: &Train, b: &Train) -> Ordering {
        match self {
            // `Train::price` is finite, so this is a total order.
            Criteria::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
            Criteria::ArrivalTime => a.arrival_time.cmp(&b.arrival_time),
            Criteria::DepartureTime => a.departure_time.cmp(&b.departure_time),
        }
    }
}

impl FromStr for Criteria {
    type Err = UnknownCriteria;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Criteria::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCriteria(s.to_string()))
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
