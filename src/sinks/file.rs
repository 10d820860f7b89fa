//! File sink implementation

use crate::core::{LoggerError, Result, Sink};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Buffered file sink owning the session's log file.
///
/// The file is created at start (truncating any previous contents) and
/// released when the worker drops the sink after the final flush.
pub struct FileSink {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl FileSink {
    /// Create the log file at `path`.
    ///
    /// Failure here is the one fatal startup condition of the logger.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = File::create(&path)
            .map_err(|source| LoggerError::sink_open(path.display().to_string(), source))?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }

    /// Path of the log file this sink writes to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write(&mut self, message: &str) -> Result<()> {
        self.writer.write_all(message.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Ensure all buffered data reaches the disk
        let _ = self.writer.flush();
    }
}
