//! # Resync Guard
//!
//! Ownership handle for the delayed re-notification task. Dropping the
//! guard aborts a still-pending resync, so page teardown never leaves a
//! stray timer behind.

use tokio::task::JoinHandle;

/// Cancellable handle to a scheduled resync
#[derive(Debug)]
pub struct ResyncGuard {
    handle: Option<JoinHandle<()>>,
}

impl ResyncGuard {
    pub(crate) fn new(handle: JoinHandle<()>) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    /// Guard with nothing scheduled
    pub(crate) fn noop() -> Self {
        Self { handle: None }
    }

    /// Let the resync run to completion unowned
    pub fn detach(mut self) {
        self.handle.take();
    }

    /// True once the resync ran, was cancelled, or was never scheduled
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for ResyncGuard {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;

    fn delayed_flag_task(flag: Arc<AtomicBool>) -> JoinHandle<()> {
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            flag.store(true, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_pending_task() {
        let flag = Arc::new(AtomicBool::new(false));
        let guard = ResyncGuard::new(delayed_flag_task(Arc::clone(&flag)));

        drop(guard);
        tokio::time::sleep(Duration::from_secs(2)).await;

        assert!(!flag.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_detach_lets_task_finish() {
        let flag = Arc::new(AtomicBool::new(false));
        let guard = ResyncGuard::new(delayed_flag_task(Arc::clone(&flag)));

        guard.detach();
        tokio::time::sleep(Duration::from_secs(2)).await;

        assert!(flag.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_finished_after_task_runs() {
        let guard = ResyncGuard::new(tokio::spawn(async {}));

        tokio::time::sleep(Duration::from_millis(1)).await;

        assert!(guard.is_finished());
    }

    #[test]
    fn test_noop_guard_is_finished() {
        let guard = ResyncGuard::noop();
        assert!(guard.is_finished());
    }
}
