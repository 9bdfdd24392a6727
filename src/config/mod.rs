//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `SEMF1_*` environment variables.
//! Scoring constants are configured separately by
//! [`ScoringConfig::from_env`](crate::scoring::ScoringConfig::from_env).

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_DICT_PATH, DEFAULT_MAX_WORKERS};

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Thesaurus file. Default: `data/cilin.txt`.
    ///
    /// A missing file is not an error: scoring runs without synonyms.
    pub dict_path: PathBuf,

    /// Extra segmentation dictionary for the tokenizer.
    pub user_dict_path: Option<PathBuf>,

    /// Enable HMM discovery of out-of-vocabulary words. Default: `true`.
    pub hmm: bool,

    /// Max rows scored concurrently in batch mode. Default: `8`.
    pub max_workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dict_path: PathBuf::from(DEFAULT_DICT_PATH),
            user_dict_path: None,
            hmm: true,
            max_workers: DEFAULT_MAX_WORKERS,
        }
    }
}

impl Config {
    const ENV_DICT_PATH: &'static str = "SEMF1_DICT_PATH";
    const ENV_USER_DICT: &'static str = "SEMF1_USER_DICT";
    const ENV_HMM: &'static str = "SEMF1_HMM";
    const ENV_MAX_WORKERS: &'static str = "SEMF1_MAX_WORKERS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let dict_path = Self::parse_path_from_env(Self::ENV_DICT_PATH, defaults.dict_path);
        let user_dict_path = Self::parse_optional_path_from_env(Self::ENV_USER_DICT);
        let hmm = Self::parse_bool_from_env(Self::ENV_HMM, defaults.hmm)?;
        let max_workers = Self::parse_workers_from_env(defaults.max_workers)?;

        Ok(Self {
            dict_path,
            user_dict_path,
            hmm,
            max_workers,
        })
    }

    /// Validates paths and basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_workers == 0 {
            return Err(ConfigError::InvalidWorkers {
                value: self.max_workers.to_string(),
            });
        }

        if self.dict_path.exists() && !self.dict_path.is_file() {
            return Err(ConfigError::NotAFile {
                path: self.dict_path.clone(),
            });
        }

        if let Some(ref path) = self.user_dict_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    fn parse_workers_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_MAX_WORKERS) {
            Ok(value) => {
                let workers: usize =
                    value
                        .trim()
                        .parse()
                        .map_err(|e| ConfigError::WorkersParseError {
                            value: value.clone(),
                            source: e,
                        })?;

                if workers == 0 {
                    return Err(ConfigError::InvalidWorkers { value });
                }

                Ok(workers)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bool_from_env(var_name: &'static str, default: bool) -> Result<bool, ConfigError> {
        match env::var(var_name) {
            Ok(value) => match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidBool {
                    name: var_name,
                    value,
                }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}
