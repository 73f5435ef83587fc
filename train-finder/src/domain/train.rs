//! Train schedule records.

use std::fmt;

use super::{ScheduleTime, StationId};

/// A numeric train identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrainId(pub i64);

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One train's schedule entry.
///
/// Built once by the loader with every field validated, then only read.
#[derive(Debug, Clone, PartialEq)]
pub struct Train {
    pub id: TrainId,
    pub departure_station: StationId,
    pub arrival_station: StationId,
    /// Always finite. The loader rejects anything else, and code building
    /// trains by hand must do the same for price ranking to be well defined.
    pub price: f32,
    pub arrival_time: ScheduleTime,
    pub departure_time: ScheduleTime,
}

impl Train {
    /// Whether this train runs from `departure` to `arrival`.
    pub fn runs_between(&self, departure: StationId, arrival: StationId) -> bool {
        self.departure_station == departure && self.arrival_station == arrival
    }
}

impl fmt::Display for Train {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "train {}: {} -> {}, departs {}, arrives {}, price {:.2}",
            self.id,
            self.departure_station,
            self.arrival_station,
            self.departure_time,
            self.arrival_time,
            self.price
        )
    }
}
