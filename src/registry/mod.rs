//! Namespace registry: one logger per case-folded namespace.
//!
//! # Data Flow
//! ```text
//! get_or_create("Payments")
//!     → lock registry
//!     → key "payments" present?  yes → shared Arc<Logger>
//!                                no  → resolve level from env
//!                                      → Logger + default handler
//!                                      → insert
//!     → unlock
//! ```
//!
//! # Design Decisions
//! - The registry is an explicit object; the process-wide default lives in
//!   the facade module
//! - Construction happens under the registry lock, so concurrent lookups of
//!   one namespace build exactly one logger
//! - The lock is held only for lookup-or-create and prefix changes, never
//!   while handlers run
//! - The env prefix is configuration-time only: it can change while no
//!   namespace other than the root exists

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use crate::config::LoggerConfig;
use crate::env::{resolve_env_level, EnvSource, ProcessEnv, ResolvedLevel};
use crate::handler::{ConsoleHandler, ConsoleStream, Handler};
use crate::level::Level;
use crate::logger::Logger;

/// Environment variable prefix used when none is configured.
pub const DEFAULT_ENV_PREFIX: &str = "SEVERINO_LOGGER";

/// Errors returned by registry operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The prefix can no longer change because namespaced loggers exist.
    #[error("cannot change prefix because some loggers are already in use: {}", .namespaces.join(", "))]
    AlreadyInUse { namespaces: Vec<String> },
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

type HandlerFactory = Arc<dyn Fn() -> Option<Arc<dyn Handler>> + Send + Sync>;

struct RegistryState {
    loggers: HashMap<String, Arc<Logger>>,
    prefix: String,
}

/// Map from namespace to its singleton logger.
pub struct Registry {
    state: Mutex<RegistryState>,
    env: Arc<dyn EnvSource>,
    fallback: Level,
    default_handler: HandlerFactory,
}

impl Registry {
    /// Registry reading the process environment under [`DEFAULT_ENV_PREFIX`],
    /// attaching a stdout [`ConsoleHandler`] to each new logger.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Registry configured from a loaded [`LoggerConfig`].
    pub fn from_config(config: &LoggerConfig) -> Self {
        let builder = Self::builder()
            .env_prefix(config.env_prefix.clone())
            .fallback_level(config.default_level);

        if config.console.enabled {
            builder.console(config.console.stream).build()
        } else {
            builder.without_default_handler().build()
        }
    }

    /// Return the logger for `name`, creating it on first use.
    ///
    /// Lookup is case-insensitive. A new logger takes its level from the
    /// environment and receives one default handler, built and initialized
    /// under the registry lock.
    pub fn get_or_create(&self, name: &str) -> Arc<Logger> {
        let mut state = self.lock();
        let key = name.to_lowercase();

        if let Some(logger) = state.loggers.get(&key) {
            return logger.clone();
        }

        let resolved = self.resolve_with_prefix(&state.prefix, name);
        let logger = Arc::new(Logger::new(name, resolved.level));
        if let Some(handler) = (self.default_handler)() {
            logger.add_handler(handler);
        }

        tracing::debug!(
            namespace = %name,
            level = %resolved.level,
            source = %resolved.source,
            "Logger created"
        );

        state.loggers.insert(key, logger.clone());
        logger
    }

    /// The root-namespace logger.
    pub fn root(&self) -> Arc<Logger> {
        self.get_or_create("")
    }

    /// Change the environment variable prefix.
    ///
    /// Fails if any namespace other than the root has been created; the
    /// registry is unchanged in that case. On success the root logger is
    /// dropped so the next lookup re-reads the environment under the new
    /// prefix.
    pub fn set_environment_variable_prefix(&self, prefix: impl Into<String>) -> RegistryResult<()> {
        let prefix = prefix.into();
        let mut state = self.lock();

        let mut in_use: Vec<String> = state
            .loggers
            .keys()
            .filter(|namespace| !namespace.is_empty())
            .cloned()
            .collect();

        if !in_use.is_empty() {
            in_use.sort();
            tracing::warn!(
                prefix = %prefix,
                namespaces = ?in_use,
                "Rejected env prefix change"
            );
            return Err(RegistryError::AlreadyInUse { namespaces: in_use });
        }

        state.loggers.remove("");
        tracing::debug!(old = %state.prefix, new = %prefix, "Env prefix changed");
        state.prefix = prefix;

        Ok(())
    }

    pub fn environment_variable_prefix(&self) -> String {
        self.lock().prefix.clone()
    }

    /// Resolve the level `name` would receive if created now.
    pub fn resolve_level(&self, name: &str) -> ResolvedLevel {
        let prefix = self.environment_variable_prefix();
        self.resolve_with_prefix(&prefix, name)
    }

    /// Registered namespace keys (lowercased), sorted.
    pub fn namespaces(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.lock().loggers.keys().cloned().collect();
        keys.sort();
        keys
    }

    fn resolve_with_prefix(&self, prefix: &str, name: &str) -> ResolvedLevel {
        resolve_env_level(self.env.as_ref(), prefix, name, self.fallback)
    }

    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Registry")
            .field("prefix", &state.prefix)
            .field("namespaces", &state.loggers.len())
            .field("env", &self.env)
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Registry`].
pub struct RegistryBuilder {
    prefix: String,
    env: Arc<dyn EnvSource>,
    fallback: Level,
    default_handler: HandlerFactory,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_ENV_PREFIX.to_string(),
            env: Arc::new(ProcessEnv),
            fallback: Level::default(),
            default_handler: console_factory(ConsoleStream::default()),
        }
    }
}

impl RegistryBuilder {
    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Source of environment variables (defaults to the process environment).
    pub fn env(mut self, env: impl EnvSource + 'static) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Level used when neither env variable is set.
    pub fn fallback_level(mut self, level: Level) -> Self {
        self.fallback = level;
        self
    }

    /// Attach a [`ConsoleHandler`] on `stream` to each new logger.
    pub fn console(mut self, stream: ConsoleStream) -> Self {
        self.default_handler = console_factory(stream);
        self
    }

    /// Produce each new logger's default handler with `factory`.
    ///
    /// The factory and the handler's `init` run while the registry lock is
    /// held. Neither may call back into the same registry, or the lookup
    /// deadlocks. A panic in either leaves the registry usable; the namespace
    /// being created is not registered.
    pub fn default_handler<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Arc<dyn Handler> + Send + Sync + 'static,
    {
        self.default_handler = Arc::new(move || Some(factory()));
        self
    }

    /// New loggers start with no handlers.
    pub fn without_default_handler(mut self) -> Self {
        self.default_handler = Arc::new(|| None);
        self
    }

    pub fn build(self) -> Registry {
        Registry {
            state: Mutex::new(RegistryState {
                loggers: HashMap::new(),
                prefix: self.prefix,
            }),
            env: self.env,
            fallback: self.fallback,
            default_handler: self.default_handler,
        }
    }
}

fn console_factory(stream: ConsoleStream) -> HandlerFactory {
    Arc::new(move || Some(Arc::new(ConsoleHandler::new(stream)) as Arc<dyn Handler>))
}
