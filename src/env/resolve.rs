//! Level resolution from environment variables.

use std::fmt;

use crate::env::EnvSource;
use crate::level::Level;

/// Where a resolved level came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelSource {
    /// The namespace-specific variable, e.g. `PREFIX_PAYMENTS`.
    Namespace(String),
    /// The blanket variable, i.e. `PREFIX` itself.
    Prefix(String),
    /// Neither variable was set.
    Fallback,
}

impl fmt::Display for LevelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelSource::Namespace(key) | LevelSource::Prefix(key) => write!(f, "${}", key),
            LevelSource::Fallback => f.write_str("fallback"),
        }
    }
}

/// A level together with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLevel {
    pub level: Level,
    pub source: LevelSource,
}

/// Build the variable name holding the level for `namespace`.
///
/// The namespace is uppercased and `-`/`.` become `_`. An empty namespace
/// maps to the bare prefix.
pub fn env_key(prefix: &str, namespace: &str) -> String {
    if namespace.is_empty() {
        return prefix.to_string();
    }

    let suffix: String = namespace
        .to_uppercase()
        .chars()
        .map(|c| if c == '-' || c == '.' { '_' } else { c })
        .collect();

    format!("{}_{}", prefix, suffix)
}

/// Resolve the level for `namespace`.
///
/// Checks `<PREFIX>_<NAMESPACE>` first, then `<PREFIX>`. Values are
/// lowercased and parsed permissively. `fallback` applies only when neither
/// variable holds a value.
pub fn resolve_env_level(
    env: &dyn EnvSource,
    prefix: &str,
    namespace: &str,
    fallback: Level,
) -> ResolvedLevel {
    let lookup = |key: &str| env.var(key).filter(|value| !value.is_empty());

    let key = env_key(prefix, namespace);
    if !namespace.is_empty() {
        if let Some(value) = lookup(&key) {
            return ResolvedLevel {
                level: Level::from_str_lossy(&value.to_lowercase()),
                source: LevelSource::Namespace(key),
            };
        }
    }

    match lookup(prefix) {
        Some(value) => ResolvedLevel {
            level: Level::from_str_lossy(&value.to_lowercase()),
            source: LevelSource::Prefix(prefix.to_string()),
        },
        None => ResolvedLevel {
            level: fallback,
            source: LevelSource::Fallback,
        },
    }
}
