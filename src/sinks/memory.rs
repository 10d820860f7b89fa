//! In-memory sink that captures delivered messages
//!
//! Used by tests and benchmarks to observe exactly what the worker
//! delivered, and in what order, without touching stdout or the
//! filesystem.

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Collects every delivered message into a shared buffer.
///
/// Clones share the same buffer, so a test can keep one handle while the
/// worker owns the other.
#[derive(Clone, Default)]
pub struct MemorySink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages delivered so far, in delivery order
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Sink for MemorySink {
    fn write(&mut self, message: &str) -> Result<()> {
        self.messages.lock().push(message.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
