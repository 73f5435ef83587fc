//! Runtime configuration for the train finder.

use std::path::PathBuf;

/// Environment variable naming the train data file.
pub const DATA_PATH_ENV: &str = "TRAIN_FINDER_DATA";

/// Environment variable holding the log filter directive.
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

/// Configuration parameters for a finder run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderConfig {
    /// Path to the JSON train data file.
    pub data_path: PathBuf,

    /// `tracing` filter directive, e.g. "warn" or "train_finder=debug".
    pub log_filter: String,
}

impl FinderConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(data_path: impl Into<PathBuf>, log_filter: impl Into<String>) -> Self {
        Self {
            data_path: data_path.into(),
            log_filter: log_filter.into(),
        }
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup`, which maps variable names to values.
    ///
    /// Unset and empty variables leave the default in place.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let lookup = |key: &str| lookup(key).filter(|v: &String| !v.is_empty());

        if let Some(path) = lookup(DATA_PATH_ENV) {
            config.data_path = PathBuf::from(path);
        }
        if let Some(filter) = lookup(LOG_FILTER_ENV) {
            config.log_filter = filter;
        }

        config
    }

    /// Replace the data path, e.g. from a command line flag.
    pub fn with_data_path(mut self, data_path: impl Into<PathBuf>) -> Self {
        self.data_path = data_path.into();
        self
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data.json"),
            log_filter: "warn".to_string(),
        }
    }
}
