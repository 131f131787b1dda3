//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::handler::ConsoleStream;
use crate::level::Level;
use crate::registry::DEFAULT_ENV_PREFIX;

/// Root configuration for a registry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Prefix of the level environment variables (e.g. "SEVERINO_LOGGER").
    pub env_prefix: String,

    /// Level for loggers whose environment variables are unset.
    pub default_level: Level,

    /// Default console handler settings.
    pub console: ConsoleConfig,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
            default_level: Level::Info,
            console: ConsoleConfig::default(),
        }
    }
}

/// Console handler attached to every new logger.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// When false, new loggers start without handlers.
    pub enabled: bool,

    /// Stream to write to.
    pub stream: ConsoleStream,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stream: ConsoleStream::Stdout,
        }
    }
}
