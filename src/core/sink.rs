//! Output sink abstraction

use super::error::Result;

/// A destination that receives fully formatted log lines.
///
/// Messages arrive exactly as the producer built them; sinks write them
/// verbatim and never append line terminators. After startup a sink is
/// owned exclusively by the worker thread, so implementations only need
/// to be `Send`.
pub trait Sink: Send {
    /// Write one message verbatim
    fn write(&mut self, message: &str) -> Result<()>;

    /// Flush any buffered output
    fn flush(&mut self) -> Result<()>;

    /// Short name used in diagnostics
    fn name(&self) -> &str;
}
