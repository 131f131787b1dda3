//! Environment lookups.
//!
//! # Data Flow
//! ```text
//! namespace "payments-api.v2", prefix "APP"
//!     → resolve.rs builds "APP_PAYMENTS_API_V2"
//!     → EnvSource lookup (falls back to "APP")
//!     → Level::from_str_lossy
//! ```
//!
//! # Design Decisions
//! - Lookups go through the `EnvSource` trait so registries can be tested
//!   without touching the process environment
//! - Empty values count as unset

pub mod resolve;

use std::collections::HashMap;

pub use resolve::{env_key, resolve_env_level, LevelSource, ResolvedLevel};

/// Read-only view of environment variables.
pub trait EnvSource: Send + Sync + std::fmt::Debug {
    /// Returns the value of `key`, or `None` if it is unset or not valid unicode.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed in-memory environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
