//! Shared helpers for integration tests.

use std::sync::{Arc, Mutex};

use severino_logger::env::MapEnv;
use severino_logger::{Capabilities, Capability, Handler, Level, Registry};

/// One observed handler call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Init(String, Level),
    Debug(String),
    Info(String),
    Warn(String),
    Error(String),
    Fatal(String),
}

/// Shared, ordered log of calls across handlers.
pub type Journal = Arc<Mutex<Vec<(&'static str, Call)>>>;

/// Handler appending every call it receives to a journal.
pub struct RecordingHandler {
    name: &'static str,
    capabilities: Capabilities,
    journal: Journal,
}

impl RecordingHandler {
    pub fn new(name: &'static str, journal: &Journal) -> Arc<Self> {
        Self::with_capabilities(name, journal, Capabilities::all())
    }

    pub fn with_capabilities(
        name: &'static str,
        journal: &Journal,
        capabilities: Capabilities,
    ) -> Arc<Self> {
        Arc::new(Self {
            name,
            capabilities,
            journal: journal.clone(),
        })
    }

    fn record(&self, call: Call) {
        self.journal.lock().unwrap().push((self.name, call));
    }
}

impl Handler for RecordingHandler {
    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn init(&self, namespace: &str, level: Level) {
        self.record(Call::Init(namespace.to_string(), level));
    }

    fn debug(&self, msg: &str) {
        self.record(Call::Debug(msg.to_string()));
    }

    fn info(&self, msg: &str) {
        self.record(Call::Info(msg.to_string()));
    }

    fn warn(&self, msg: &str) {
        self.record(Call::Warn(msg.to_string()));
    }

    fn error(&self, msg: &str) {
        self.record(Call::Error(msg.to_string()));
    }

    fn fatal(&self, msg: &str) {
        self.record(Call::Fatal(msg.to_string()));
    }
}

/// Drain the journal.
pub fn take(journal: &Journal) -> Vec<(&'static str, Call)> {
    std::mem::take(&mut *journal.lock().unwrap())
}

/// Registry over a fixed environment with prefix "PREFIX" and no default handler.
pub fn registry(vars: &[(&str, &str)]) -> Registry {
    Registry::builder()
        .env_prefix("PREFIX")
        .env(vars.iter().copied().collect::<MapEnv>())
        .without_default_handler()
        .build()
}

#[allow(dead_code)]
pub fn messages_only() -> Capabilities {
    Capabilities::none()
        .with(Capability::Info)
        .with(Capability::Error)
}
