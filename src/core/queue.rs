//! Thread-safe hand-off queue between producers and the log worker
//!
//! An unbounded FIFO of fully formatted log lines. Any number of producer
//! threads push; exactly one worker blocks on [`MessageQueue::recv`]. The
//! queue and the shutdown flag share one mutex, so a shutdown request and
//! its wakeup cannot race a worker that is mid-check.

use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;

/// Monitor guarding the message FIFO and the shutdown flag
pub struct MessageQueue {
    state: Mutex<QueueState>,
    ready: Condvar,
}

struct QueueState {
    messages: VecDeque<String>,
    /// Monotonic: once set it never reverts for this queue's lifetime
    shutdown: bool,
}

impl MessageQueue {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(QueueState {
                messages: VecDeque::new(),
                shutdown: false,
            }),
            ready: Condvar::new(),
        }
    }

    /// Append a message to the tail and wake the worker.
    ///
    /// Returns `false`, dropping the message, once shutdown has been
    /// requested; enqueueing after `stop` is a documented no-op.
    pub fn push(&self, message: String) -> bool {
        let mut state = self.state.lock();
        if state.shutdown {
            return false;
        }
        state.messages.push_back(message);
        drop(state);
        // notify_all rather than notify_one: the predicate re-check is
        // cheap and this rules out missed wakeups when a signal races the
        // consumer re-entering the wait.
        self.ready.notify_all();
        true
    }

    /// Pop the next message, blocking while the queue is empty.
    ///
    /// Returns `None` only when shutdown has been requested and every
    /// queued message has already been handed out, so a draining worker
    /// never abandons unflushed messages.
    pub fn recv(&self) -> Option<String> {
        let mut state = self.state.lock();
        loop {
            if let Some(message) = state.messages.pop_front() {
                return Some(message);
            }
            if state.shutdown {
                return None;
            }
            // Releases the lock while blocked, reacquires on wake; the
            // predicate above is re-checked after every wake.
            self.ready.wait(&mut state);
        }
    }

    /// Request shutdown.
    ///
    /// The flag update and the wakeup happen under the queue lock, so a
    /// worker mid-check cannot miss both.
    pub fn shutdown(&self) {
        let mut state = self.state.lock();
        state.shutdown = true;
        self.ready.notify_all();
    }

    /// Whether shutdown has been requested
    pub fn is_shut_down(&self) -> bool {
        self.state.lock().shutdown
    }

    /// Number of messages currently waiting
    pub fn len(&self) -> usize {
        self.state.lock().messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MessageQueue {
    fn default() -> Self {
        Self::new()
    }
}
