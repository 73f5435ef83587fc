//! Conversion from data file DTOs to domain types.

use crate::domain::{ScheduleTime, StationId, TimeError, Train, TrainId};

use super::types::TrainRecord;

/// Which time field of a record failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Arrival,
    Departure,
}

impl std::fmt::Display for TimeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeField::Arrival => f.write_str("arrival"),
            TimeField::Departure => f.write_str("departure"),
        }
    }
}

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Failed to parse a time string
    #[error("wrong {field} time {value:?}: {source}")]
    InvalidTime {
        field: TimeField,
        value: String,
        source: TimeError,
    },

    /// The price does not fit a finite `f32`
    #[error("wrong price {value}: out of range")]
    InvalidPrice { value: f64 },
}

/// Convert a single data file record to a validated train.
pub fn convert_record(record: &TrainRecord) -> Result<Train, ConversionError> {
    let price = record.price as f32;
    if !price.is_finite() {
        return Err(ConversionError::InvalidPrice {
            value: record.price,
        });
    }

    let arrival_time = parse_time(&record.arrival_time, TimeField::Arrival)?;
    let departure_time = parse_time(&record.departure_time, TimeField::Departure)?;

    Ok(Train {
        id: TrainId(record.train_id),
        departure_station: StationId::new(record.departure_station_id),
        arrival_station: StationId::new(record.arrival_station_id),
        price,
        arrival_time,
        departure_time,
    })
}

fn parse_time(value: &str, field: TimeField) -> Result<ScheduleTime, ConversionError> {
    ScheduleTime::parse(value).map_err(|source| ConversionError::InvalidTime {
        field,
        value: value.to_string(),
        source,
    })
}
