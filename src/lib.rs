//! Leveled, per-namespace logging with pluggable handlers.
//!
//! # Architecture Overview
//!
//! ```text
//!   caller ──get_or_create("payments")──▶ Registry ──(first use)──▶ env level
//!                                             │                     + default handler
//!                                             ▼
//!   caller ──info!(logger, ...)─────────▶  Logger  ── level gate
//!                                             │
//!                        format once ◀────────┘
//!                             │
//!              ┌──────────────┼──────────────┐
//!              ▼              ▼              ▼
//!          handler 1      handler 2      handler 3     (only those declaring
//!                                                        the matching capability)
//! ```
//!
//! Levels come from `<PREFIX>_<NAMESPACE>` or `<PREFIX>` environment
//! variables, `SEVERINO_LOGGER` by default.

mod macros;

pub mod config;
pub mod env;
pub mod facade;
pub mod handler;
pub mod level;
pub mod logger;
pub mod registry;

pub use facade::{
    add_handler, debug, default_environment_variable_prefix, default_logger, error, fatal,
    global, info, namespace, set_default_environment_variable_prefix, set_level, warn,
};
pub use handler::{Capabilities, Capability, Handler};
pub use level::Level;
pub use logger::{FatalSignal, LogWriter, Logger};
pub use registry::{Registry, RegistryBuilder, RegistryError, DEFAULT_ENV_PREFIX};
