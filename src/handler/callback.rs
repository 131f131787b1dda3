//! Closure-backed handler.
//!
//! Each hook is an optional callback; the declared capabilities are exactly
//! the callbacks that were set.

use std::fmt;

use crate::handler::{Capabilities, Capability, Handler};
use crate::level::Level;

type InitFn = Box<dyn Fn(&str, Level) + Send + Sync>;
type MessageFn = Box<dyn Fn(&str) + Send + Sync>;

/// Handler assembled from optional callbacks.
///
/// ```
/// use severino_logger::handler::CallbackHandler;
///
/// let handler = CallbackHandler::new()
///     .on_error(|msg| eprintln!("alert: {}", msg));
/// ```
#[derive(Default)]
pub struct CallbackHandler {
    init: Option<InitFn>,
    debug: Option<MessageFn>,
    info: Option<MessageFn>,
    warn: Option<MessageFn>,
    error: Option<MessageFn>,
    fatal: Option<MessageFn>,
}

impl CallbackHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_init(mut self, f: impl Fn(&str, Level) + Send + Sync + 'static) -> Self {
        self.init = Some(Box::new(f));
        self
    }

    pub fn on_debug(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.debug = Some(Box::new(f));
        self
    }

    pub fn on_info(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.info = Some(Box::new(f));
        self
    }

    pub fn on_warn(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.warn = Some(Box::new(f));
        self
    }

    pub fn on_error(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.error = Some(Box::new(f));
        self
    }

    pub fn on_fatal(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.fatal = Some(Box::new(f));
        self
    }

    fn call(hook: &Option<MessageFn>, msg: &str) {
        if let Some(f) = hook {
            f(msg);
        }
    }
}

impl fmt::Debug for CallbackHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackHandler")
            .field("capabilities", &self.capabilities())
            .finish()
    }
}

impl Handler for CallbackHandler {
    fn capabilities(&self) -> Capabilities {
        [
            (self.init.is_some(), Capability::Init),
            (self.debug.is_some(), Capability::Debug),
            (self.info.is_some(), Capability::Info),
            (self.warn.is_some(), Capability::Warn),
            (self.error.is_some(), Capability::Error),
            (self.fatal.is_some(), Capability::Fatal),
        ]
        .into_iter()
        .filter_map(|(set, capability)| set.then_some(capability))
        .collect()
    }

    fn init(&self, namespace: &str, level: Level) {
        if let Some(f) = &self.init {
            f(namespace, level);
        }
    }

    fn debug(&self, msg: &str) {
        Self::call(&self.debug, msg);
    }

    fn info(&self, msg: &str) {
        Self::call(&self.info, msg);
    }

    fn warn(&self, msg: &str) {
        Self::call(&self.warn, msg);
    }

    fn error(&self, msg: &str) {
        Self::call(&self.error, msg);
    }

    fn fatal(&self, msg: &str) {
        Self::call(&self.fatal, msg);
    }
}
