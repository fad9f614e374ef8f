//! Runtime configuration.
//!
//! Values come from the environment (optionally a `.env` file loaded by
//! `dotenv` in `main`), command line flags override them.

use std::env;
use std::path::PathBuf;

/// Default log4rs configuration file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Environment variable naming the log4rs configuration file.
pub const ENV_LOG_CONFIG: &str = "SUBNET_LOG_CONFIG";

/// Environment variable naming the default input file.
pub const ENV_INPUT: &str = "SUBNET_INPUT";

/// Environment variable selecting lenient import (drop bad entries).
pub const ENV_LENIENT: &str = "SUBNET_LENIENT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_config: PathBuf,
    pub input: Option<PathBuf>,
    pub lenient: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            input: None,
            lenient: false,
        }
    }
}

impl Config {
    /// Build the configuration from environment variables.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Config {
        let defaults = Config::default();
        Config {
            log_config: lookup(ENV_LOG_CONFIG)
                .map(PathBuf::from)
                .unwrap_or(defaults.log_config),
            input: lookup(ENV_INPUT).map(PathBuf::from),
            lenient: lookup(ENV_LENIENT)
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.lenient),
        }
    }
}
