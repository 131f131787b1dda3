//! Fatal event signal.

use thiserror::Error;

/// Outcome of a fatal log call.
///
/// The logger never exits the process itself. The top-level entry point
/// either calls [`FatalSignal::exit`] or propagates the signal as an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("fatal event in namespace {namespace:?}: {message}")]
#[must_use = "a fatal event should end the process; call `exit()` or propagate it"]
pub struct FatalSignal {
    namespace: String,
    message: String,
    dispatched: bool,
}

impl FatalSignal {
    /// Process exit status used by [`FatalSignal::exit`].
    pub const EXIT_CODE: i32 = 1;

    pub(crate) fn new(namespace: String, message: String, dispatched: bool) -> Self {
        Self {
            namespace,
            message,
            dispatched,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// False when the logger level was below Error and no handler saw the message.
    pub fn was_dispatched(&self) -> bool {
        self.dispatched
    }

    /// Terminate the process with [`FatalSignal::EXIT_CODE`].
    pub fn exit(self) -> ! {
        std::process::exit(Self::EXIT_CODE)
    }
}
