//! Runtime configuration, read from the environment and an optional `.env` file

use std::{env, path::PathBuf, str::FromStr};

use log::LevelFilter;
use thiserror::Error;

pub const LOG_FILE_VAR: &str = "VALIDADOR_LOG_FILE";
pub const LOG_LEVEL_VAR: &str = "VALIDADOR_LOG_LEVEL";

const DEFAULT_LOG_FILE: &str = "./validador.log";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level {0:?} in VALIDADOR_LOG_LEVEL")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl Config {
    /// Loads `.env` if there is one, then reads the process environment
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup(LOG_FILE_VAR).filter(|p| !p.trim().is_empty()) {
            config.log_file = PathBuf::from(path);
        }

        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.log_level = LevelFilter::from_str(level.trim())
                .map_err(|_| ConfigError::InvalidLogLevel(level))?;
        }

        Ok(config)
    }
}
