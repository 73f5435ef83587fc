//! Logging setup.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const FALLBACK_LEVEL: LevelFilter = LevelFilter::WARN;

/// Build the filter for `directive`, falling back to warnings only.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|err| {
        eprintln!("invalid log filter {directive:?}, falling back to level '{FALLBACK_LEVEL}' - {err}");
        EnvFilter::new(FALLBACK_LEVEL.to_string())
    })
}

/// Install the global subscriber, logging to stderr.
///
/// Does nothing if a subscriber is already installed.
pub fn init_logging(directive: &str) {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(build_filter(directive))
        .try_init();
}
