//! Explicit task scope for everything a controller spawns.
//!
//! The scope is created by the owner (a screen, a test) and handed to the
//! controller. Cancelling it stops the controller's actor, any pending
//! debounce timer and any in-flight fetch at their next await point.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;
use tokio::task::JoinHandle;

#[derive(Clone)]
pub struct TaskScope {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Cancel the scope. Idempotent.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            tracing::debug!("task scope cancelled");
            self.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Resolves once the scope is cancelled.
    pub async fn cancelled(&self) {
        // Register interest before checking the flag, otherwise a cancel
        // between the check and the await would be missed.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }

    /// Spawn a task that is dropped when the scope is cancelled.
    ///
    /// Returns `None` from the join handle if the task was cut short.
    pub fn spawn<F>(&self, future: F) -> JoinHandle<Option<F::Output>>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let scope = self.clone();
        tokio::spawn(async move {
            if scope.is_cancelled() {
                return None;
            }
            tokio::select! {
                biased;
                _ = scope.cancelled() => None,
                out = future => Some(out),
            }
        })
    }

    /// A child scope: cancelled with its parent, or on its own.
    pub fn child(&self) -> TaskScope {
        let child = TaskScope::new();
        if self.is_cancelled() {
            child.cancel();
            return child;
        }
        let parent = self.clone();
        let linked = child.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = parent.cancelled() => linked.cancel(),
                _ = linked.cancelled() => {}
            }
        });
        child
    }
}

impl Default for TaskScope {
    fn default() -> Self {
        Self::new()
    }
}
