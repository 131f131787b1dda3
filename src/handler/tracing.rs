//! Bridge into the `tracing` ecosystem.
//!
//! Messages become `tracing` events with the logger namespace attached as a
//! field. Fatal messages are emitted at `ERROR` with `fatal = true`.

use std::sync::{PoisonError, RwLock};

use crate::handler::{Capabilities, Handler};
use crate::level::Level;

/// Forwards messages to the active `tracing` subscriber.
///
/// The `namespace` field carries the namespace from the most recent `init`.
/// When one instance is shared between loggers, events from all of them are
/// tagged with the namespace of the logger that initialized it last.
#[derive(Debug, Default)]
pub struct TracingHandler {
    namespace: RwLock<String>,
}

impl TracingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    fn namespace(&self) -> String {
        self.namespace
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Handler for TracingHandler {
    fn capabilities(&self) -> Capabilities {
        Capabilities::all()
    }

    fn init(&self, namespace: &str, _level: Level) {
        *self.namespace.write().unwrap_or_else(PoisonError::into_inner) = namespace.to_string();
    }

    fn debug(&self, msg: &str) {
        ::tracing::debug!(namespace = %self.namespace(), "{}", msg);
    }

    fn info(&self, msg: &str) {
        ::tracing::info!(namespace = %self.namespace(), "{}", msg);
    }

    fn warn(&self, msg: &str) {
        ::tracing::warn!(namespace = %self.namespace(), "{}", msg);
    }

    fn error(&self, msg: &str) {
        ::tracing::error!(namespace = %self.namespace(), "{}", msg);
    }

    fn fatal(&self, msg: &str) {
        ::tracing::error!(namespace = %self.namespace(), fatal = true, "{}", msg);
    }
}
