//! Train finder.
//!
//! Loads train schedules from a JSON file and answers: "which three trains
//! from this station to that one are cheapest, arrive first or leave first?"

pub mod cli;
pub mod config;
pub mod domain;
pub mod finder;
pub mod loader;
pub mod logging;
