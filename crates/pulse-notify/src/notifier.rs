use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use pulse_core::{Dispose, Signal, watch};

use crate::debounce::Debounce;
use crate::liveness::Epoch;
use crate::status::StatusProbe;

/// Debounced counter notifier: one status check per settled counter value.
///
/// Every counter change cancels the pending timer and reschedules, so only
/// the value that stays unchanged for the full quiet period produces an
/// outbound check. A failed check is logged and never rolls the counter
/// back. Running the returned guard detaches the watcher, cancels the
/// pending timer, and marks in-flight results as ignorable.
pub fn watch_counter<P>(counter: &Signal<i64>, probe: Rc<P>, quiet: Duration) -> Dispose
where
    P: StatusProbe + 'static,
{
    let debounce = Rc::new(Debounce::new(quiet));

    let unsubscribe = watch(counter, {
        let debounce = debounce.clone();
        move |new, _old| {
            let value = *new;
            log::debug!("counter changed to {value}; scheduling status check");
            let probe = probe.clone();
            debounce.schedule(move |token| async move {
                let ok = probe.check().await;
                if !token.is_live() {
                    log::debug!("discarding stale status result for counter value {value}");
                    return;
                }
                if !ok {
                    log::warn!("status check failed after counter change to {value}");
                }
            });
        }
    });

    unsubscribe.also(Dispose::new(move || debounce.cancel()))
}

/// Toggle notifier with rollback: on every flag change (the attach-time value
/// is skipped), issue one status check and revert the flag to its pre-change
/// value if the check fails.
///
/// The revert write is guarded so it does not itself count as a change, and a
/// result whose token is stale — the guard was disposed, or a newer flag
/// change superseded it — is discarded without touching the flag.
pub fn watch_toggle<P>(flag: &Signal<bool>, probe: Rc<P>) -> Dispose
where
    P: StatusProbe + 'static,
{
    let epoch = Epoch::new();
    let reverting = Rc::new(Cell::new(false));

    let unsubscribe = watch(flag, {
        let epoch = epoch.clone();
        let reverting = reverting.clone();
        let flag = flag.clone();
        move |new, old| {
            if reverting.get() {
                return;
            }
            epoch.bump();
            let token = epoch.token();
            let probe = probe.clone();
            let flag = flag.clone();
            let reverting = reverting.clone();
            let (new, old) = (*new, *old);
            tokio::task::spawn_local(async move {
                let ok = probe.check().await;
                if !token.is_live() {
                    log::debug!("discarding stale status result for toggle {new}");
                    return;
                }
                if !ok {
                    log::warn!("status check failed; reverting toggle to {old}");
                    reverting.set(true);
                    flag.set(old);
                    reverting.set(false);
                }
            });
        }
    });

    let epoch_guard = Dispose::new(move || epoch.bump());
    unsubscribe.also(epoch_guard)
}
