//! Cancel-on-reschedule debounced task execution.
//!
//! One abstraction serves both debounced channels (search queries and
//! viewport settles); the two instances are independent and share no
//! cancellation state.

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Runs at most one delayed task: scheduling a new one cancels whatever is
/// still pending from before.
///
/// Cancellation only covers the quiescence delay and the task body as a unit;
/// callers that cannot tolerate a stale body completing after a reschedule
/// must additionally guard with a generation counter.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `task` to run after the quiescence delay, cancelling any
    /// previously scheduled task that has not fired yet.
    ///
    /// Must be called within a tokio runtime.
    pub fn schedule<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let mut pending = self.pending.lock().expect("debouncer mutex poisoned");
        if let Some(previous) = pending.take() {
            previous.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));
    }

    /// Cancel the pending task, if any, without scheduling a new one.
    pub fn cancel(&self) {
        if let Some(previous) = self
            .pending
            .lock()
            .expect("debouncer mutex poisoned")
            .take()
        {
            previous.abort();
        }
    }
}
