//! Console sink implementation

use crate::core::{Result, Sink};
use std::io::{self, Write};

/// Writes log lines verbatim to standard output.
///
/// No terminators are appended and no styling is applied; the bytes that
/// were enqueued are the bytes that appear.
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, message: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(message.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        io::stdout().lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
