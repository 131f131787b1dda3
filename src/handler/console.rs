//! Console handler, attached to every new logger by default.
//!
//! # Output Format
//! ```text
//! [INFO] payments: charge accepted
//! [WARN] retrying in 5s              (root namespace)
//! ```

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::handler::{Capabilities, Handler};
use crate::level::Level;

/// Standard stream a console handler writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleStream {
    #[default]
    Stdout,
    Stderr,
}

struct Binding {
    namespace: String,
    level: Level,
}

/// Writes one line per message to a stream.
///
/// The namespace in each line is the one from the most recent `init`. A
/// handler attached to several loggers therefore labels every message with
/// the namespace of whichever logger initialized it last; give each logger
/// its own `ConsoleHandler` when the label matters.
pub struct ConsoleHandler {
    out: Mutex<Box<dyn Write + Send>>,
    binding: Mutex<Binding>,
}

impl ConsoleHandler {
    /// Handler writing to the given standard stream.
    pub fn new(stream: ConsoleStream) -> Self {
        match stream {
            ConsoleStream::Stdout => Self::with_writer(io::stdout()),
            ConsoleStream::Stderr => Self::with_writer(io::stderr()),
        }
    }

    /// Handler writing to an arbitrary writer.
    pub fn with_writer(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
            binding: Mutex::new(Binding {
                namespace: String::new(),
                level: Level::default(),
            }),
        }
    }

    /// Namespace this handler was last initialized with.
    pub fn namespace(&self) -> String {
        self.binding
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .namespace
            .clone()
    }

    /// Level this handler was last initialized with.
    pub fn level(&self) -> Level {
        self.binding
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .level
    }

    fn emit(&self, label: &str, msg: &str) {
        let namespace = self.namespace();
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);

        // Write errors are dropped.
        let _ = if namespace.is_empty() {
            writeln!(out, "[{}] {}", label, msg)
        } else {
            writeln!(out, "[{}] {}: {}", label, namespace, msg)
        };
        let _ = out.flush();
    }
}

impl Default for ConsoleHandler {
    fn default() -> Self {
        Self::new(ConsoleStream::default())
    }
}

impl std::fmt::Debug for ConsoleHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleHandler")
            .field("namespace", &self.namespace())
            .field("level", &self.level())
            .finish_non_exhaustive()
    }
}

impl Handler for ConsoleHandler {
    fn capabilities(&self) -> Capabilities {
        Capabilities::all()
    }

    fn init(&self, namespace: &str, level: Level) {
        let mut binding = self.binding.lock().unwrap_or_else(PoisonError::into_inner);
        binding.namespace = namespace.to_string();
        binding.level = level;
    }

    fn debug(&self, msg: &str) {
        self.emit("DEBUG", msg);
    }

    fn info(&self, msg: &str) {
        self.emit("INFO", msg);
    }

    fn warn(&self, msg: &str) {
        self.emit("WARN", msg);
    }

    fn error(&self, msg: &str) {
        self.emit("ERROR", msg);
    }

    fn fatal(&self, msg: &str) {
        self.emit("FATAL", msg);
    }
}
