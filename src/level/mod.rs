//! Severity levels.
//!
//! # Ordering
//! ```text
//! None < Error < Warn < Info < Debug
//! ```
//! A logger configured at level `L` emits a message of severity `S` iff
//! `S <= L`. `None` disables everything, `Debug` enables everything.
//!
//! # Design Decisions
//! - Parsing from the environment is permissive: unknown strings map to `Info`
//! - Parsing from config files is strict (serde), so typos surface as errors

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Logger verbosity, ascending.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Level {
    /// Nothing is emitted.
    None = 0,
    /// Errors and fatal events only.
    Error = 1,
    /// Warnings and above.
    Warn = 2,
    /// Informational messages and above.
    #[default]
    Info = 3,
    /// Everything.
    Debug = 4,
}

impl Level {
    /// All levels, least verbose first.
    pub const ALL: [Level; 5] = [
        Level::None,
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
    ];

    /// Parse a level name, case-insensitively.
    ///
    /// Unknown names, including the empty string and names with surrounding
    /// whitespace, resolve to [`Level::Info`].
    pub fn from_str_lossy(s: &str) -> Self {
        if s.eq_ignore_ascii_case("debug") {
            Level::Debug
        } else if s.eq_ignore_ascii_case("info") {
            Level::Info
        } else if s.eq_ignore_ascii_case("warn") {
            Level::Warn
        } else if s.eq_ignore_ascii_case("error") {
            Level::Error
        } else if s.eq_ignore_ascii_case("none") {
            Level::None
        } else {
            Level::Info
        }
    }

    /// Returns true if a message of `severity` passes a logger set to `self`.
    pub fn allows(self, severity: Level) -> bool {
        severity != Level::None && severity <= self
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::None => "none",
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Level::from_str_lossy(s))
    }
}
