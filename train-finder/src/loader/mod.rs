//! Train data loader.
//!
//! Reads the JSON data file and turns it into validated [`Train`] records.
//! Loading happens in two stages: serde decodes the raw [`TrainRecord`]
//! DTOs, then [`convert_record`] validates their times. The first invalid
//! record fails the whole load.

mod convert;
mod error;
mod types;

use std::path::Path;

use tracing::debug;

use crate::domain::Train;

pub use convert::{ConversionError, TimeField, convert_record};
pub use error::LoadError;
pub use types::TrainRecord;

/// Parse a JSON array of train records.
pub fn parse_trains(json: &str) -> Result<Vec<Train>, LoadError> {
    let records: Vec<TrainRecord> = serde_json::from_str(json)?;

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            convert_record(record).map_err(|source| LoadError::Record { index, source })
        })
        .collect()
}

/// Read and parse the train data file at `path`.
pub fn load_trains(path: &Path) -> Result<Vec<Train>, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let trains = parse_trains(&contents)?;
    debug!(path = %path.display(), trains = trains.len(), "Loaded train data");

    Ok(trains)
}
