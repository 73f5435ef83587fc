//! Domain types for the train finder.
//!
//! This module contains the validated value types the finder works on.
//! All types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod station;
mod time;
mod train;

pub use station::{InvalidStationId, StationId};
pub use time::{ScheduleTime, TIME_FORMAT, TimeError};
pub use train::{Train, TrainId};
