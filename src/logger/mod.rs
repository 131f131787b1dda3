//! Per-namespace logger: level filtering and handler fan-out.
//!
//! # Data Flow
//! ```text
//! logger.info(args)
//!     → level gate (no formatting when rejected)
//!     → snapshot handler list, release lock
//!     → format once
//!     → handlers declaring Capability::Info, in attachment order
//! ```
//!
//! # Design Decisions
//! - Level and handler list sit behind a per-logger `RwLock`
//! - The state lock is never held while a handler runs, so handlers may log
//!   through the same logger
//! - A separate init mutex serializes level changes and attachment with the
//!   `init` calls they trigger, so every handler ends on the logger's level.
//!   Handlers must not call `set_level` or `add_handler` on the same logger
//!   from inside `init`
//! - `fatal` returns a [`FatalSignal`] instead of exiting

pub mod fatal;
pub mod writer;

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::handler::{Capability, Handler};
use crate::level::Level;

pub use fatal::FatalSignal;
pub use writer::LogWriter;

struct LoggerState {
    level: Level,
    handlers: Vec<Arc<dyn Handler>>,
}

/// A named logger with its own level and handler list.
pub struct Logger {
    namespace: String,
    state: RwLock<LoggerState>,
    init_lock: Mutex<()>,
}

impl Logger {
    /// Create a logger with no handlers.
    ///
    /// Loggers are normally obtained from a [`Registry`](crate::Registry),
    /// which guarantees one instance per namespace.
    pub fn new(namespace: impl Into<String>, level: Level) -> Self {
        Self {
            namespace: namespace.into(),
            state: RwLock::new(LoggerState {
                level,
                handlers: Vec::new(),
            }),
            init_lock: Mutex::new(()),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn level(&self) -> Level {
        self.state().level
    }

    /// Returns true if a message at `severity` would be dispatched.
    pub fn is_enabled(&self, severity: Level) -> bool {
        self.state().level.allows(severity)
    }

    pub fn handler_count(&self) -> usize {
        self.state().handlers.len()
    }

    /// Append a handler. Handlers declaring Init are initialized immediately
    /// with this logger's namespace and current level.
    pub fn add_handler(&self, handler: Arc<dyn Handler>) {
        let _init = self.init_guard();
        let level = {
            let mut state = self.state_mut();
            state.handlers.push(handler.clone());
            state.level
        };

        if handler.capabilities().contains(Capability::Init) {
            handler.init(&self.namespace, level);
        }
    }

    /// Change the level and re-initialize every handler declaring Init.
    pub fn set_level(&self, level: Level) {
        let _init = self.init_guard();
        let handlers = {
            let mut state = self.state_mut();
            state.level = level;
            state.handlers.clone()
        };

        for handler in handlers
            .iter()
            .filter(|h| h.capabilities().contains(Capability::Init))
        {
            handler.init(&self.namespace, level);
        }
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.dispatch(Level::Debug, Capability::Debug, args, |h, msg| h.debug(msg));
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.dispatch(Level::Info, Capability::Info, args, |h, msg| h.info(msg));
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.dispatch(Level::Warn, Capability::Warn, args, |h, msg| h.warn(msg));
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.dispatch(Level::Error, Capability::Error, args, |h, msg| h.error(msg));
    }

    /// Log at a runtime-selected severity. `Level::None` is a no-op.
    pub fn log(&self, severity: Level, args: fmt::Arguments<'_>) {
        match severity {
            Level::None => {}
            Level::Error => self.error(args),
            Level::Warn => self.warn(args),
            Level::Info => self.info(args),
            Level::Debug => self.debug(args),
        }
    }

    /// Dispatch a fatal message to handlers declaring Fatal.
    ///
    /// Dispatch is gated at the Error threshold. The returned signal is
    /// produced regardless of level; the caller decides when to call
    /// [`FatalSignal::exit`].
    pub fn fatal(&self, args: fmt::Arguments<'_>) -> FatalSignal {
        let message = args.to_string();
        let dispatched = match self.enabled_handlers(Level::Error) {
            Some(handlers) => {
                fan_out(&handlers, Capability::Fatal, &message, |h, msg| h.fatal(msg));
                true
            }
            None => false,
        };

        FatalSignal::new(self.namespace.clone(), message, dispatched)
    }

    /// An owned `io::Write` adapter that logs each write at Info.
    pub fn writer(self: &Arc<Self>) -> LogWriter {
        LogWriter::new(self.clone())
    }

    fn dispatch(
        &self,
        severity: Level,
        capability: Capability,
        args: fmt::Arguments<'_>,
        hook: impl Fn(&dyn Handler, &str),
    ) {
        let Some(handlers) = self.enabled_handlers(severity) else {
            return;
        };

        let msg = args.to_string();
        fan_out(&handlers, capability, &msg, hook);
    }

    fn enabled_handlers(&self, severity: Level) -> Option<Vec<Arc<dyn Handler>>> {
        let state = self.state();
        state
            .level
            .allows(severity)
            .then(|| state.handlers.clone())
    }

    // Poisoned locks are recovered.
    fn state(&self) -> RwLockReadGuard<'_, LoggerState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn state_mut(&self) -> RwLockWriteGuard<'_, LoggerState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn init_guard(&self) -> MutexGuard<'_, ()> {
        self.init_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn fan_out(
    handlers: &[Arc<dyn Handler>],
    capability: Capability,
    msg: &str,
    hook: impl Fn(&dyn Handler, &str),
) {
    for handler in handlers
        .iter()
        .filter(|h| h.capabilities().contains(capability))
    {
        hook(handler.as_ref(), msg);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state();
        f.debug_struct("Logger")
            .field("namespace", &self.namespace)
            .field("level", &state.level)
            .field("handlers", &state.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::{CallbackHandler, Capabilities};
    use std::panic::{self, AssertUnwindSafe};
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::thread;
    use std::time::Duration;

    type Events = Arc<Mutex<Vec<String>>>;

    fn recorder(tag: &'static str, events: &Events) -> Arc<dyn Handler> {
        let (d, i, w, e, f, n) = (
            events.clone(),
            events.clone(),
            events.clone(),
            events.clone(),
            events.clone(),
            events.clone(),
        );
        Arc::new(
            CallbackHandler::new()
                .on_init(move |ns, lvl| n.lock().unwrap().push(format!("{tag}.init({ns},{lvl})")))
                .on_debug(move |m| d.lock().unwrap().push(format!("{tag}.debug({m})")))
                .on_info(move |m| i.lock().unwrap().push(format!("{tag}.info({m})")))
                .on_warn(move |m| w.lock().unwrap().push(format!("{tag}.warn({m})")))
                .on_error(move |m| e.lock().unwrap().push(format!("{tag}.error({m})")))
                .on_fatal(move |m| f.lock().unwrap().push(format!("{tag}.fatal({m})"))),
        )
    }

    fn take(events: &Events) -> Vec<String> {
        std::mem::take(&mut *events.lock().unwrap())
    }

    #[test]
    fn test_add_handler_runs_init() {
        let events = Events::default();
        let logger = Logger::new("svc", Level::Warn);
        logger.add_handler(recorder("h", &events));

        assert_eq!(take(&events), vec!["h.init(svc,warn)"]);
        assert_eq!(logger.handler_count(), 1);
    }

    #[test]
    fn test_set_level_reinitializes() {
        let events = Events::default();
        let logger = Logger::new("svc", Level::Info);
        logger.add_handler(recorder("h", &events));
        logger.set_level(Level::Debug);

        assert_eq!(take(&events), vec!["h.init(svc,info)", "h.init(svc,debug)"]);
        assert_eq!(logger.level(), Level::Debug);
    }

    #[test]
    fn test_level_gating() {
        let events = Events::default();
        let logger = Logger::new("svc", Level::Error);
        logger.add_handler(recorder("h", &events));
        take(&events);

        logger.debug(format_args!("d"));
        logger.info(format_args!("i"));
        logger.warn(format_args!("w"));
        logger.error(format_args!("e"));

        assert_eq!(take(&events), vec!["h.error(e)"]);
    }

    #[test]
    fn test_level_none_disables_everything() {
        let events = Events::default();
        let logger = Logger::new("svc", Level::None);
        logger.add_handler(recorder("h", &events));
        take(&events);

        logger.error(format_args!("e"));
        let signal = logger.fatal(format_args!("f"));

        assert!(take(&events).is_empty());
        assert!(!signal.was_dispatched());
    }

    #[test]
    fn test_fan_out_order() {
        let events = Events::default();
        let logger = Logger::new("svc", Level::Info);
        logger.add_handler(recorder("h1", &events));
        logger.add_handler(recorder("h2", &events));
        take(&events);

        logger.info(format_args!("hello {}", 42));
        assert_eq!(take(&events), vec!["h1.info(hello 42)", "h2.info(hello 42)"]);
    }

    #[test]
    fn test_missing_capability_skipped() {
        let events = Events::default();
        let sink = events.clone();
        let logger = Logger::new("svc", Level::Debug);
        logger.add_handler(Arc::new(
            CallbackHandler::new().on_error(move |m| sink.lock().unwrap().push(m.to_string())),
        ));

        logger.info(format_args!("not for you"));
        logger.error(format_args!("for you"));

        assert_eq!(take(&events), vec!["for you"]);
    }

    #[test]
    fn test_rejected_message_is_not_formatted() {
        struct Explode;
        impl fmt::Display for Explode {
            fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
                panic!("formatted a rejected message");
            }
        }

        let logger = Logger::new("svc", Level::Warn);
        logger.debug(format_args!("{}", Explode));
        logger.info(format_args!("{}", Explode));
    }

    #[test]
    fn test_fatal_dispatches_at_error() {
        let events = Events::default();
        let logger = Logger::new("svc", Level::Error);
        logger.add_handler(recorder("h", &events));
        take(&events);

        let signal = logger.fatal(format_args!("out of {}", "disk"));

        assert_eq!(take(&events), vec!["h.fatal(out of disk)"]);
        assert!(signal.was_dispatched());
        assert_eq!(signal.message(), "out of disk");
        assert_eq!(signal.namespace(), "svc");
    }

    #[test]
    fn test_log_by_level() {
        let events = Events::default();
        let logger = Logger::new("svc", Level::Debug);
        logger.add_handler(recorder("h", &events));
        take(&events);

        logger.log(Level::Warn, format_args!("w"));
        logger.log(Level::None, format_args!("nothing"));

        assert_eq!(take(&events), vec!["h.warn(w)"]);
    }

    #[test]
    fn test_handler_may_log_reentrantly() {
        let logger = Arc::new(Logger::new("svc", Level::Debug));
        let inner = Arc::downgrade(&logger);
        let events = Events::default();
        let sink = events.clone();

        logger.add_handler(Arc::new(
            CallbackHandler::new()
                .on_warn(move |m| {
                    if let Some(logger) = inner.upgrade() {
                        logger.info(format_args!("echo {}", m));
                    }
                })
                .on_info(move |m| sink.lock().unwrap().push(m.to_string())),
        ));

        logger.warn(format_args!("ping"));
        assert_eq!(take(&events), vec!["echo ping"]);
    }

    /// Blocks inside its first `init` until released.
    struct GatedInit {
        gate: Mutex<Option<(Sender<()>, Receiver<()>)>>,
        last: Mutex<Option<Level>>,
    }

    impl Handler for GatedInit {
        fn capabilities(&self) -> Capabilities {
            Capabilities::none().with(Capability::Init)
        }

        fn init(&self, _namespace: &str, level: Level) {
            let gate = self.gate.lock().unwrap().take();
            if let Some((entered, release)) = gate {
                entered.send(()).unwrap();
                release.recv().unwrap();
            }
            *self.last.lock().unwrap() = Some(level);
        }
    }

    #[test]
    fn test_racing_set_level_leaves_handler_on_current_level() {
        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let handler = Arc::new(GatedInit {
            gate: Mutex::new(Some((entered_tx, release_rx))),
            last: Mutex::new(None),
        });
        let logger = Arc::new(Logger::new("svc", Level::Info));

        let attach = {
            let logger = logger.clone();
            let handler = handler.clone();
            thread::spawn(move || logger.add_handler(handler))
        };
        entered_rx.recv().unwrap();

        let raise = {
            let logger = logger.clone();
            thread::spawn(move || logger.set_level(Level::Debug))
        };
        thread::sleep(Duration::from_millis(50));
        release_tx.send(()).unwrap();

        attach.join().unwrap();
        raise.join().unwrap();

        assert_eq!(logger.level(), Level::Debug);
        assert_eq!(*handler.last.lock().unwrap(), Some(Level::Debug));
    }

    #[test]
    fn test_panicking_init_does_not_wedge_logger() {
        let events = Events::default();
        let sink = events.clone();
        let logger = Logger::new("svc", Level::Info);
        logger.add_handler(Arc::new(CallbackHandler::new().on_init(|_, level| {
            if level == Level::Debug {
                panic!("init rejected debug");
            }
        })));
        logger.add_handler(Arc::new(
            CallbackHandler::new().on_info(move |m| sink.lock().unwrap().push(m.to_string())),
        ));

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| logger.set_level(Level::Debug)));
        assert!(outcome.is_err());

        logger.info(format_args!("still here"));
        logger.set_level(Level::Warn);

        assert_eq!(logger.level(), Level::Warn);
        assert_eq!(take(&events), vec!["still here"]);
    }
}
