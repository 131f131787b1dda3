//! Process-wide default registry and root-logger shortcuts.
//!
//! Every function here forwards to [`global()`], a [`Registry`] created on
//! first use with the default settings. Libraries that need control over
//! construction should hold their own `Registry` instead.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::handler::Handler;
use crate::level::Level;
use crate::logger::{FatalSignal, Logger};
use crate::registry::{Registry, RegistryResult};

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry.
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(Registry::new)
}

/// Logger for `name` from the process-wide registry.
pub fn namespace(name: &str) -> Arc<Logger> {
    global().get_or_create(name)
}

/// The root-namespace logger.
pub fn default_logger() -> Arc<Logger> {
    global().root()
}

pub fn set_default_environment_variable_prefix(prefix: impl Into<String>) -> RegistryResult<()> {
    global().set_environment_variable_prefix(prefix)
}

pub fn default_environment_variable_prefix() -> String {
    global().environment_variable_prefix()
}

pub fn add_handler(handler: Arc<dyn Handler>) {
    default_logger().add_handler(handler);
}

pub fn set_level(level: Level) {
    default_logger().set_level(level);
}

pub fn level() -> Level {
    default_logger().level()
}

pub fn debug(args: fmt::Arguments<'_>) {
    default_logger().debug(args);
}

pub fn info(args: fmt::Arguments<'_>) {
    default_logger().info(args);
}

pub fn warn(args: fmt::Arguments<'_>) {
    default_logger().warn(args);
}

pub fn error(args: fmt::Arguments<'_>) {
    default_logger().error(args);
}

pub fn fatal(args: fmt::Arguments<'_>) -> FatalSignal {
    default_logger().fatal(args)
}
