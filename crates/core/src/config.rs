use std::env;
use std::path::PathBuf;

use crate::errors::CoreError;

pub const ENV_DATA_DIR: &str = "PROOFOLIO_DATA_DIR";
pub const ENV_RESET_ON_START: &str = "PROOFOLIO_RESET_ON_START";
pub const ENV_CHART_SEED: &str = "PROOFOLIO_CHART_SEED";
pub const ENV_ANONYMOUS_AUTHOR: &str = "PROOFOLIO_ANONYMOUS_AUTHOR";

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory for `FileStore`; `None` keeps everything in memory.
    pub data_dir: Option<PathBuf>,

    /// Wipe every storage key before loading, so the seed data is shown on each start.
    pub reset_on_start: bool,

    /// Seed for the chart-series generator.
    pub chart_seed: u64,

    /// Display name used when a caller has no identity of its own.
    pub anonymous_author: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            reset_on_start: false,
            chart_seed: 42,
            anonymous_author: "Anonymous".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from the environment (and a `.env` file if present), falling back to defaults.
    pub fn from_env() -> Result<Self, CoreError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unset keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|d| !d.trim().is_empty()) {
            config.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(raw) = lookup(ENV_RESET_ON_START) {
            config.reset_on_start = match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" | "" => false,
                other => {
                    return Err(CoreError::InvalidConfig(format!(
                        "{ENV_RESET_ON_START} must be true or false, got '{other}'"
                    )))
                }
            };
        }

        if let Some(raw) = lookup(ENV_CHART_SEED) {
            config.chart_seed = raw.trim().parse().map_err(|_| {
                CoreError::InvalidConfig(format!(
                    "{ENV_CHART_SEED} must be an unsigned integer, got '{raw}'"
                ))
            })?;
        }

        if let Some(name) = lookup(ENV_ANONYMOUS_AUTHOR).filter(|n| !n.trim().is_empty()) {
            config.anonymous_author = name.trim().to_string();
        }

        Ok(config)
    }
}
