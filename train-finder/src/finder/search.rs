//! Filtering and ranking of train records.

use tracing::debug;

use crate::domain::{InvalidStationId, StationId, Train};

use super::criteria::{Criteria, UnknownCriteria};

/// Number of trains a successful search returns.
pub const BEST_TRAINS_COUNT: usize = 3;

/// Which end of the journey a station identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Departure,
    Arrival,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Departure => f.write_str("departure"),
            Endpoint::Arrival => f.write_str("arrival"),
        }
    }
}

/// Error from a train search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FindError {
    /// No train records were supplied
    #[error("not enough trains: dataset is empty")]
    EmptyDataset,

    /// A station identifier is empty or not an integer
    #[error("bad {endpoint} station input: {source}")]
    InvalidInput {
        endpoint: Endpoint,
        source: InvalidStationId,
    },

    /// Fewer trains than [`BEST_TRAINS_COUNT`] run between the stations
    #[error("not enough best trains: found {found}, need {}", BEST_TRAINS_COUNT)]
    InsufficientResults { found: usize },

    /// The ranking criterion is not recognised
    #[error(transparent)]
    UnsupportedCriteria(#[from] UnknownCriteria),
}

/// A search as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Departure station identifier, as text.
    pub departure_station: String,

    /// Arrival station identifier, as text.
    pub arrival_station: String,

    /// Ranking criterion name.
    pub criteria: String,
}

impl Query {
    /// Create a new query.
    pub fn new(
        departure_station: impl Into<String>,
        arrival_station: impl Into<String>,
        criteria: impl Into<String>,
    ) -> Self {
        Self {
            departure_station: departure_station.into(),
            arrival_station: arrival_station.into(),
            criteria: criteria.into(),
        }
    }
}

/// Answers queries against a loaded set of trains.
#[derive(Debug, Clone, Copy)]
pub struct TrainFinder<'a> {
    trains: &'a [Train],
}

impl<'a> TrainFinder<'a> {
    /// Create a finder over `trains`, kept in file order.
    pub fn new(trains: &'a [Train]) -> Self {
        Self { trains }
    }

    /// Find the best [`BEST_TRAINS_COUNT`] trains for `query`.
    ///
    /// Checks run in a fixed order and the first failure wins: empty
    /// dataset, empty departure, empty arrival, non-numeric departure,
    /// non-numeric arrival, too few matches, unknown criterion.
    pub fn find(&self, query: &Query) -> Result<Vec<Train>, FindError> {
        if self.trains.is_empty() {
            return Err(FindError::EmptyDataset);
        }

        reject_empty(&query.departure_station, Endpoint::Departure)?;
        reject_empty(&query.arrival_station, Endpoint::Arrival)?;

        let departure = parse_station(&query.departure_station, Endpoint::Departure)?;
        let arrival = parse_station(&query.arrival_station, Endpoint::Arrival)?;

        let mut matches: Vec<Train> = self
            .trains
            .iter()
            .filter(|train| train.runs_between(departure, arrival))
            .cloned()
            .collect();

        debug!(
            departure = %departure,
            arrival = %arrival,
            matches = matches.len(),
            "Filtered trains"
        );

        if matches.len() < BEST_TRAINS_COUNT {
            return Err(FindError::InsufficientResults {
                found: matches.len(),
            });
        }

        let criteria: Criteria = query.criteria.parse()?;
        debug!(criteria = %criteria, "Ranking trains");

        rank_trains(&mut matches, criteria);
        matches.truncate(BEST_TRAINS_COUNT);

        Ok(matches)
    }
}

/// Find the best trains from `departure_station` to `arrival_station`.
///
/// # Examples
///
/// ```
/// use train_finder::finder::find_best_trains;
/// use train_finder::loader::parse_trains;
///
/// let trains = parse_trains(r#"[
///     {"TrainID": 1, "DepartureStationID": 1902, "ArrivalStationID": 1929,
///      "Price": 10.0, "ArrivalTime": "08:00:00", "DepartureTime": "07:00:00"},
///     {"TrainID": 2, "DepartureStationID": 1902, "ArrivalStationID": 1929,
///      "Price": 5.0, "ArrivalTime": "09:00:00", "DepartureTime": "07:30:00"},
///     {"TrainID": 3, "DepartureStationID": 1902, "ArrivalStationID": 1929,
///      "Price": 7.0, "ArrivalTime": "07:30:00", "DepartureTime": "06:45:00"}
/// ]"#).unwrap();
///
/// let best = find_best_trains("1902", "1929", "price", &trains).unwrap();
/// let ids: Vec<i64> = best.iter().map(|t| t.id.0).collect();
/// assert_eq!(ids, [2, 3, 1]);
/// ```
pub fn find_best_trains(
    departure_station: &str,
    arrival_station: &str,
    criteria: &str,
    trains: &[Train],
) -> Result<Vec<Train>, FindError> {
    TrainFinder::new(trains).find(&Query::new(departure_station, arrival_station, criteria))
}

/// Sort trains ascending by `criteria`, keeping ties in input order.
pub fn rank_trains(trains: &mut [Train], criteria: Criteria) {
    trains.sort_by(|a, b| criteria.compare(a, b));
}

fn reject_empty(input: &str, endpoint: Endpoint) -> Result<(), FindError> {
    if input.is_empty() {
        return Err(FindError::InvalidInput {
            endpoint,
            source: InvalidStationId::empty(),
        });
    }
    Ok(())
}

fn parse_station(input: &str, endpoint: Endpoint) -> Result<StationId, FindError> {
    StationId::parse(input).map_err(|source| FindError::InvalidInput { endpoint, source })
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
