//! The single background consumer that drains the queue into the sinks

use super::error::{LoggerError, Result};
use super::metrics::LoggerMetrics;
use super::queue::MessageQueue;
use super::sink::Sink;
use std::sync::Arc;
use std::thread;

/// Handle to the worker thread draining a [`MessageQueue`]
pub struct LogWorker {
    handle: thread::JoinHandle<()>,
}

impl LogWorker {
    /// Spawn the worker thread.
    ///
    /// The worker takes ownership of the sinks; no other thread writes to
    /// them afterwards.
    pub fn spawn(
        queue: Arc<MessageQueue>,
        sinks: Vec<Box<dyn Sink>>,
        metrics: Arc<LoggerMetrics>,
    ) -> Result<Self> {
        let handle = thread::Builder::new()
            .name("log-worker".to_string())
            .spawn(move || drain_loop(&queue, sinks, &metrics))
            .map_err(LoggerError::WorkerSpawn)?;

        Ok(Self { handle })
    }

    /// Block until the worker has flushed every pending message and exited.
    pub fn join(self) {
        if self.handle.join().is_err() {
            eprintln!("[LOGGER ERROR] log worker thread panicked");
        }
    }
}

/// Pop and deliver messages until shutdown is requested and the queue is
/// empty, then flush the sinks and exit.
///
/// Delivery is best-effort past the in-process queue: a failing sink is
/// reported (first failure, then every 1000th) and never stops the drain
/// or withholds the message from the other sinks.
fn drain_loop(queue: &MessageQueue, mut sinks: Vec<Box<dyn Sink>>, metrics: &LoggerMetrics) {
    while let Some(message) = queue.recv() {
        for sink in sinks.iter_mut() {
            if let Err(e) = sink.write(&message) {
                let prior_errors = metrics.record_sink_error();
                if prior_errors == 0 || (prior_errors + 1).is_multiple_of(1000) {
                    eprintln!(
                        "[LOGGER ERROR] sink '{}' write failed ({} so far): {}",
                        sink.name(),
                        prior_errors + 1,
                        e
                    );
                }
            }
        }
        metrics.record_delivered();
    }

    for sink in sinks.iter_mut() {
        if let Err(e) = sink.flush() {
            eprintln!("[LOGGER ERROR] sink '{}' flush failed: {}", sink.name(), e);
        }
    }
}
