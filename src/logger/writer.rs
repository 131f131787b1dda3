//! `io::Write` adapters.
//!
//! Each write becomes one Info message with a single trailing newline
//! removed, so a logger can stand in wherever a writer is expected.

use std::io::{self, Write};
use std::sync::Arc;

use crate::logger::Logger;

fn write_line(logger: &Logger, buf: &[u8]) -> usize {
    let text = String::from_utf8_lossy(buf);
    let line = text.strip_suffix('\n').unwrap_or(&text);
    logger.info(format_args!("{}", line));
    buf.len()
}

impl Write for &Logger {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(write_line(self, buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Write for Logger {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(write_line(self, buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Owned writer over a shared logger; see [`Logger::writer`].
#[derive(Debug, Clone)]
pub struct LogWriter {
    logger: Arc<Logger>,
}

impl LogWriter {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(write_line(&self.logger, buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
