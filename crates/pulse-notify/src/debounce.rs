use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::liveness::{Epoch, Liveness};

/// Quiet period used by the demo notifiers.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Cancellable scheduled-task handle.
///
/// At most one attempt is pending at a time; a new [`schedule`] cancels the
/// pending timer synchronously and replaces it. Once the quiet period has
/// elapsed the attempt itself is fire-and-forget: it always runs to
/// completion, and the [`Liveness`] token it was handed decides whether its
/// result may still be applied.
///
/// Per watched value the lifecycle is
/// `Idle -> Scheduled -> InFlight -> {Settled | Cancelled}`, where
/// `Scheduled -> Cancelled` happens on a superseding schedule, an explicit
/// [`cancel`], or drop.
///
/// [`schedule`]: Debounce::schedule
/// [`cancel`]: Debounce::cancel
pub struct Debounce {
    quiet: Duration,
    epoch: Epoch,
    pending: Rc<RefCell<Option<JoinHandle<()>>>>,
}

impl Debounce {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            epoch: Epoch::new(),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Schedules `attempt` to run after the quiet period, replacing any
    /// pending attempt. Must be called inside a `tokio::task::LocalSet`.
    pub fn schedule<F, Fut>(&self, attempt: F)
    where
        F: FnOnce(Liveness) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        self.epoch.bump();
        let token = self.epoch.token();

        if let Some(prev) = self.pending.borrow_mut().take() {
            prev.abort();
        }

        let quiet = self.quiet;
        let pending = self.pending.clone();
        let handle = tokio::task::spawn_local(async move {
            sleep(quiet).await;
            if !token.is_live() {
                return;
            }
            // The timer survived the quiet period. Drop the pending handle so
            // a later schedule cancels only timers, never the in-flight
            // attempt; the token suppresses a stale attempt's effect instead.
            pending.borrow_mut().take();
            attempt(token).await;
        });
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Cancels the pending timer and marks any in-flight attempt's result as
    /// ignorable.
    pub fn cancel(&self) {
        self.epoch.bump();
        if let Some(pending) = self.pending.borrow_mut().take() {
            pending.abort();
        }
    }
}

impl Drop for Debounce {
    fn drop(&mut self) {
        self.cancel();
    }
}
