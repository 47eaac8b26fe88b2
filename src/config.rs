use std::{fs::read_to_string, path::Path};

use serde::Deserialize;
use tracing::info;

use crate::{
    error::{Error, Result},
    timing::{clock::Region, schedule::DEFAULT_SOON_THRESHOLD_MIN},
};

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub backend_url: String,
    #[serde(default)]
    pub place_ids: Vec<String>,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_soon_threshold")]
    pub soon_threshold_minutes: u16,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

fn default_timezone() -> String {
    "+07:00".to_string()
}

fn default_soon_threshold() -> u16 {
    DEFAULT_SOON_THRESHOLD_MIN
}

fn default_poll_interval() -> u64 {
    5 * 60
}

impl Config {
    pub fn from_config(config: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(config)
            .map_err(|err| Error::Config(format!("Could not deserialize.\n{}", err)))?;
        // Surface a bad timezone at startup rather than on the first poll
        config.region()?;
        if config.poll_interval_secs == 0 {
            return Err(Error::Config(
                "poll_interval_secs must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    /// Loads `path`, or `config.json` when none is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.unwrap_or_else(|| {
            info!("No config path given, using default: {DEFAULT_CONFIG_PATH}");
            Path::new(DEFAULT_CONFIG_PATH)
        });
        let contents = read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_config(&contents)
    }

    pub fn region(&self) -> Result<Region> {
        self.timezone.parse().map_err(Error::InvalidTimezone)
    }
}
