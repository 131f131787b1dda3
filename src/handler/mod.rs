//! Handlers: the sinks a logger fans messages out to.
//!
//! # Capability Contract
//! ```text
//! Init(namespace, level)   on attach and on every level change
//! Debug(msg)               logger level >= Debug
//! Info(msg)                logger level >= Info
//! Warn(msg)                logger level >= Warn
//! Error(msg)               logger level >= Error
//! Fatal(msg)               logger level >= Error
//! ```
//!
//! # Design Decisions
//! - A handler declares its capabilities up front via `capabilities()`;
//!   the logger consults the declaration instead of probing types at runtime
//! - Every hook has a no-op default, so implementors override only what they declare
//! - Hooks take `&self`; handlers shared between loggers keep state behind locks

pub mod callback;
pub mod console;
pub mod tracing;

use std::fmt;

use crate::level::Level;

pub use callback::CallbackHandler;
pub use console::{ConsoleHandler, ConsoleStream};
pub use self::tracing::TracingHandler;

/// One optional handler behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Capability {
    Init = 1 << 0,
    Debug = 1 << 1,
    Info = 1 << 2,
    Warn = 1 << 3,
    Error = 1 << 4,
    Fatal = 1 << 5,
}

impl Capability {
    pub const ALL: [Capability; 6] = [
        Capability::Init,
        Capability::Debug,
        Capability::Info,
        Capability::Warn,
        Capability::Error,
        Capability::Fatal,
    ];
}

/// Set of capabilities a handler declares.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capabilities(u8);

impl Capabilities {
    /// No capabilities.
    pub const fn none() -> Self {
        Self(0)
    }

    /// Every capability.
    pub const fn all() -> Self {
        Self(0b0011_1111)
    }

    /// Debug, Info, Warn, Error and Fatal, without Init.
    pub const fn messages() -> Self {
        Self(Self::all().0 & !(Capability::Init as u8))
    }

    pub const fn with(self, capability: Capability) -> Self {
        Self(self.0 | capability as u8)
    }

    pub const fn without(self, capability: Capability) -> Self {
        Self(self.0 & !(capability as u8))
    }

    pub const fn contains(self, capability: Capability) -> bool {
        self.0 & capability as u8 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Capability> for Capabilities {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Capabilities::none(), |caps, capability| caps.with(capability))
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(Capability::ALL.iter().filter(|c| self.contains(**c)))
            .finish()
    }
}

/// A sink for formatted log messages.
///
/// Only the hooks whose [`Capability`] appears in [`Handler::capabilities`]
/// are ever called.
pub trait Handler: Send + Sync {
    /// The hooks this handler implements.
    fn capabilities(&self) -> Capabilities;

    fn init(&self, _namespace: &str, _level: Level) {}

    fn debug(&self, _msg: &str) {}

    fn info(&self, _msg: &str) {}

    fn warn(&self, _msg: &str) {}

    fn error(&self, _msg: &str) {}

    fn fatal(&self, _msg: &str) {}
}
