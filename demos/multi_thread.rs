//! Multi-threaded logging
//!
//! Several producer threads share one logger handle; each delivered line
//! carries the producing thread's name and call site. The final stop()
//! flushes everything the producers enqueued.
//!
//! Run with: cargo run --example multi_thread

use async_logger_system::{log, Logger, Result};
use std::thread;

const WORKERS: usize = 4;

fn main() -> Result<()> {
    let logger = Logger::start()?;

    log!(logger, "Starting {} worker threads\n", WORKERS);

    let mut handles = Vec::new();
    for worker in 0..WORKERS {
        let logger = logger.clone();
        let handle = thread::Builder::new()
            .name(format!("worker-{}", worker))
            .spawn(move || {
                for i in 0..5 {
                    log!(logger, "worker {} message {}\n", worker, i);
                }
            })
            .expect("spawn worker thread");
        handles.push(handle);
    }

    for handle in handles {
        handle.join().expect("worker thread panicked");
    }

    log!(logger, "All workers finished\n");
    logger.stop();
    Ok(())
}
