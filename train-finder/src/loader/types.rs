//! Train data file DTOs.
//!
//! These types map directly to the JSON records in the data file. Times
//! stay as strings here; conversion validates them.

use serde::{Deserialize, Serialize, Serializer};

use crate::domain::Train;

/// One record as written in the data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainRecord {
    #[serde(rename = "TrainID")]
    pub train_id: i64,

    #[serde(rename = "DepartureStationID")]
    pub departure_station_id: i64,

    #[serde(rename = "ArrivalStationID")]
    pub arrival_station_id: i64,

    /// Read wide so out-of-range values can be rejected rather than
    /// rounded to infinity.
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,

    /// Arrival time, "HH:MM:SS".
    pub arrival_time: String,

    /// Departure time, "HH:MM:SS".
    pub departure_time: String,
}

impl From<&Train> for TrainRecord {
    fn from(train: &Train) -> Self {
        Self {
            train_id: train.id.0,
            departure_station_id: train.departure_station.get(),
            arrival_station_id: train.arrival_station.get(),
            price: f64::from(train.price),
            arrival_time: train.arrival_time.to_string(),
            departure_time: train.departure_time.to_string(),
        }
    }
}

/// Prices are held as `f32`, so write the shortest `f32` form.
fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f32(*price as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_wire_names() {
        let json = r#"{
            "TrainID": 1177,
            "DepartureStationID": 1902,
            "ArrivalStationID": 1929,
            "Price": 164.65,
            "ArrivalTime": "10:25:00",
            "DepartureTime": "09:05:00"
        }"#;

        let record: TrainRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.train_id, 1177);
        assert_eq!(record.departure_station_id, 1902);
        assert_eq!(record.arrival_station_id, 1929);
        assert!((record.price - 164.65).abs() < 1e-4);
        assert_eq!(record.arrival_time, "10:25:00");
        assert_eq!(record.departure_time, "09:05:00");
    }

    #[test]
    fn missing_field_rejected() {
        let json = r#"{
            "TrainID": 1,
            "DepartureStationID": 1902,
            "ArrivalStationID": 1929,
            "Price": 10.0,
            "ArrivalTime": "10:25:00"
        }"#;

        let err = serde_json::from_str::<TrainRecord>(json).unwrap_err();
        assert!(err.to_string().contains("DepartureTime"));
    }

    #[test]
    fn serialize_uses_wire_names() {
        let record = TrainRecord {
            train_id: 2,
            departure_station_id: 1902,
            arrival_station_id: 1929,
            price: 5.0,
            arrival_time: "09:00:00".into(),
            departure_time: "07:30:00".into(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["TrainID"], 2);
        assert_eq!(value["DepartureStationID"], 1902);
        assert_eq!(value["ArrivalStationID"], 1929);
        assert_eq!(value["ArrivalTime"], "09:00:00");
        assert_eq!(value["DepartureTime"], "07:30:00");
    }

    #[test]
    fn price_written_in_short_form() {
        let record = TrainRecord {
            train_id: 1177,
            departure_station_id: 1902,
            arrival_station_id: 1929,
            price: f64::from(164.65f32),
            arrival_time: "10:25:00".into(),
            departure_time: "09:05:00".into(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""Price":164.65"#), "{json}");
    }
}
