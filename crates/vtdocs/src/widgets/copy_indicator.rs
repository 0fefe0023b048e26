//! The transient "Copied!" acknowledgment of a code block.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::trace;

/// How long "Copied!" stays up after a successful copy.
pub const DEFAULT_COPY_REVERT: Duration = Duration::from_millis(2000);

#[derive(Debug, Default)]
struct IndicatorState {
    copied: bool,
    /// Bumped by every acknowledgment; a revert only applies to its own.
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

/// Copy acknowledgment with a self-cancelling revert timer.
///
/// Every [`CopyIndicator::acknowledge`] aborts the previous revert task and
/// schedules a new one, so at most one revert is pending and it always
/// belongs to the latest acknowledgment.
#[derive(Debug)]
pub struct CopyIndicator {
    state: Arc<Mutex<IndicatorState>>,
    revert_after: Duration,
}

fn lock(state: &Mutex<IndicatorState>) -> MutexGuard<'_, IndicatorState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl CopyIndicator {
    /// Create an idle indicator.
    #[must_use]
    pub fn new(revert_after: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(IndicatorState::default())),
            revert_after,
        }
    }

    /// Check whether "Copied!" is currently shown.
    #[must_use]
    pub fn is_copied(&self) -> bool {
        lock(&self.state).copied
    }

    /// The configured revert delay.
    #[must_use]
    pub fn revert_after(&self) -> Duration {
        self.revert_after
    }

    /// Number of revert tasks still waiting (0 or 1).
    #[must_use]
    pub fn pending_reverts(&self) -> usize {
        lock(&self.state)
            .pending
            .as_ref()
            .map_or(0, |task| usize::from(!task.is_finished()))
    }

    /// Show "Copied!" and (re)arm the revert.
    ///
    /// Must be called from within a tokio runtime.
    pub fn acknowledge(&self) {
        let deadline = Instant::now() + self.revert_after;
        let mut state = lock(&self.state);

        state.generation = state.generation.wrapping_add(1);
        state.copied = true;
        if let Some(previous) = state.pending.take() {
            previous.abort();
        }

        let generation = state.generation;
        let shared = Arc::downgrade(&self.state);
        state.pending = Some(tokio::spawn(revert_at(deadline, shared, generation)));
    }

    /// Drop back to "Copy" immediately, cancelling any pending revert.
    pub fn reset(&self) {
        let mut state = lock(&self.state);
        state.generation = state.generation.wrapping_add(1);
        state.copied = false;
        if let Some(pending) = state.pending.take() {
            pending.abort();
        }
    }
}

impl Default for CopyIndicator {
    fn default() -> Self {
        Self::new(DEFAULT_COPY_REVERT)
    }
}

impl Drop for CopyIndicator {
    fn drop(&mut self) {
        if let Some(pending) = lock(&self.state).pending.take() {
            pending.abort();
        }
    }
}

async fn revert_at(deadline: Instant, shared: Weak<Mutex<IndicatorState>>, generation: u64) {
    sleep_until(deadline).await;

    let Some(shared) = shared.upgrade() else {
        return;
    };
    let mut state = lock(&shared);
    if state.generation == generation {
        state.copied = false;
        state.pending = None;
        trace!(generation, "Copy indicator reverted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Let spawned timer tasks observe the advanced clock.
    async fn settle() {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[test]
    fn test_new_indicator_is_idle() {
        let indicator = CopyIndicator::default();
        assert!(!indicator.is_copied());
        assert_eq!(indicator.pending_reverts(), 0);
        assert_eq!(indicator.revert_after(), Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reverts_after_exact_delay() {
        let indicator = CopyIndicator::default();
        indicator.acknowledge();
        assert!(indicator.is_copied());

        tokio::time::advance(Duration::from_millis(1999)).await;
        settle().await;
        assert!(indicator.is_copied());

        tokio::time::advance(Duration::from_millis(1)).await;
        settle().await;
        assert!(!indicator.is_copied());
        assert_eq!(indicator.pending_reverts(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reacknowledge_restarts_window() {
        let indicator = CopyIndicator::default();
        indicator.acknowledge();

        tokio::time::advance(Duration::from_millis(1500)).await;
        settle().await;
        indicator.acknowledge();
        assert_eq!(indicator.pending_reverts(), 1);

        // The first window would have ended here.
        tokio::time::advance(Duration::from_millis(600)).await;
        settle().await;
        assert!(indicator.is_copied());

        tokio::time::advance(Duration::from_millis(1399)).await;
        settle().await;
        assert!(indicator.is_copied());

        tokio::time::advance(Duration::from_millis(1)).await;
        settle().await;
        assert!(!indicator.is_copied());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_cancels_pending_revert() {
        let indicator = CopyIndicator::default();
        indicator.acknowledge();
        indicator.reset();

        assert!(!indicator.is_copied());
        assert_eq!(indicator.pending_reverts(), 0);

        tokio::time::advance(Duration::from_millis(3000)).await;
        settle().await;
        assert!(!indicator.is_copied());
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_delay() {
        let indicator = CopyIndicator::new(Duration::from_millis(250));
        indicator.acknowledge();

        tokio::time::advance(Duration::from_millis(250)).await;
        settle().await;
        assert!(!indicator.is_copied());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_with_pending_revert() {
        let indicator = CopyIndicator::default();
        indicator.acknowledge();
        drop(indicator);

        tokio::time::advance(Duration::from_millis(2000)).await;
        settle().await;
    }
}
