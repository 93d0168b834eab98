#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::rc::Rc;
    use std::time::Duration;

    use pulse_core::signal;
    use tokio::task::LocalSet;
    use tokio::time::sleep;

    use crate::debounce::Debounce;
    use crate::liveness::Epoch;
    use crate::notifier::{watch_counter, watch_toggle};
    use crate::status::StatusProbe;

    const QUIET: Duration = Duration::from_millis(300);

    /// Scripted stand-in for the GraphQL probe: pops one result per check,
    /// defaulting to healthy, optionally after some virtual latency.
    struct FakeProbe {
        results: RefCell<VecDeque<bool>>,
        calls: Cell<usize>,
        latency: Duration,
    }

    impl FakeProbe {
        fn healthy() -> Rc<Self> {
            Self::scripted(&[], Duration::ZERO)
        }

        fn scripted(results: &[bool], latency: Duration) -> Rc<Self> {
            Rc::new(Self {
                results: RefCell::new(results.iter().copied().collect()),
                calls: Cell::new(0),
                latency,
            })
        }

        fn calls(&self) -> usize {
            self.calls.get()
        }
    }

    impl StatusProbe for FakeProbe {
        async fn check(&self) -> bool {
            self.calls.set(self.calls.get() + 1);
            if !self.latency.is_zero() {
                sleep(self.latency).await;
            }
            self.results.borrow_mut().pop_front().unwrap_or(true)
        }
    }

    async fn run_local<F: Future>(f: F) -> F::Output {
        LocalSet::new().run_until(f).await
    }

    /// Lets tasks woken by the paused clock reach their next await point.
    async fn settle() {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[test]
    fn liveness_token_dies_on_bump() {
        let epoch = Epoch::new();
        let token = epoch.token();
        assert!(token.is_live());

        epoch.bump();
        assert!(!token.is_live());
        assert!(epoch.token().is_live());
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_changes_fire_once_for_settled_value() {
        run_local(async {
            let fired = Rc::new(RefCell::new(Vec::new()));
            let debounce = Debounce::new(QUIET);

            // counter goes 1 -> 2 -> 3, 100ms apart, all within the window
            for value in [1i64, 2, 3] {
                let fired = fired.clone();
                debounce.schedule(move |token| async move {
                    if token.is_live() {
                        fired.borrow_mut().push(value);
                    }
                });
                sleep(Duration::from_millis(100)).await;
            }

            sleep(QUIET).await;
            settle().await;
            assert_eq!(*fired.borrow(), vec![3]);
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn reschedule_restarts_the_quiet_period() {
        run_local(async {
            let fired = Rc::new(RefCell::new(Vec::new()));
            let debounce = Debounce::new(QUIET);

            let fired1 = fired.clone();
            debounce.schedule(move |_| async move {
                fired1.borrow_mut().push(1);
            });
            sleep(Duration::from_millis(200)).await;

            let fired2 = fired.clone();
            debounce.schedule(move |_| async move {
                fired2.borrow_mut().push(2);
            });

            // 400ms after the first schedule: its timer would have elapsed,
            // but it was superseded; the second is still 100ms away.
            sleep(Duration::from_millis(200)).await;
            settle().await;
            assert!(fired.borrow().is_empty());

            sleep(Duration::from_millis(150)).await;
            settle().await;
            assert_eq!(*fired.borrow(), vec![2]);
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_before_quiet_period_fires_nothing() {
        run_local(async {
            let fired = Rc::new(RefCell::new(Vec::new()));
            let debounce = Debounce::new(QUIET);

            let fired1 = fired.clone();
            debounce.schedule(move |_| async move {
                fired1.borrow_mut().push(1);
            });
            sleep(Duration::from_millis(100)).await;
            debounce.cancel();

            sleep(Duration::from_secs(1)).await;
            settle().await;
            assert!(fired.borrow().is_empty());
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_pending_timer() {
        run_local(async {
            let fired = Rc::new(RefCell::new(Vec::new()));
            let debounce = Debounce::new(QUIET);

            let fired1 = fired.clone();
            debounce.schedule(move |_| async move {
                fired1.borrow_mut().push(1);
            });
            drop(debounce);

            sleep(Duration::from_secs(1)).await;
            settle().await;
            assert!(fired.borrow().is_empty());
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn stale_in_flight_attempt_completes_but_never_applies() {
        run_local(async {
            let applied = Rc::new(RefCell::new(Vec::new()));
            let completed = Rc::new(Cell::new(0));
            let debounce = Debounce::new(QUIET);

            let applied1 = applied.clone();
            let completed1 = completed.clone();
            debounce.schedule(move |token| async move {
                // slow "request"
                sleep(Duration::from_millis(200)).await;
                completed1.set(completed1.get() + 1);
                if token.is_live() {
                    applied1.borrow_mut().push(1);
                }
            });

            // past the quiet period, the attempt is now in flight
            sleep(Duration::from_millis(350)).await;
            debounce.cancel();

            sleep(Duration::from_millis(500)).await;
            settle().await;

            // the request ran to completion; only its effect was suppressed
            assert_eq!(completed.get(), 1);
            assert!(applied.borrow().is_empty());
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn superseding_schedule_does_not_abort_in_flight_attempt() {
        run_local(async {
            let applied = Rc::new(RefCell::new(Vec::new()));
            let completed = Rc::new(Cell::new(0));
            let debounce = Debounce::new(QUIET);

            let attempt_for = |value: i64| {
                let applied = applied.clone();
                let completed = completed.clone();
                move |token: crate::liveness::Liveness| async move {
                    sleep(Duration::from_millis(200)).await;
                    completed.set(completed.get() + 1);
                    if token.is_live() {
                        applied.borrow_mut().push(value);
                    }
                }
            };

            debounce.schedule(attempt_for(1));
            sleep(Duration::from_millis(350)).await; // attempt 1 in flight
            debounce.schedule(attempt_for(2));

            sleep(Duration::from_secs(1)).await;
            settle().await;

            assert_eq!(completed.get(), 2);
            assert_eq!(*applied.borrow(), vec![2]);
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn counter_changes_collapse_into_one_check() {
        run_local(async {
            let probe = FakeProbe::healthy();
            let counter = signal(0i64);
            let guard = watch_counter(&counter, probe.clone(), QUIET);

            for value in [1, 2, 3] {
                counter.set(value);
                sleep(Duration::from_millis(100)).await;
            }

            sleep(QUIET).await;
            settle().await;

            assert_eq!(probe.calls(), 1);
            assert_eq!(counter.get(), 3);
            guard.run();
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn failed_counter_check_never_rolls_back() {
        run_local(async {
            let probe = FakeProbe::scripted(&[false], Duration::ZERO);
            let counter = signal(0i64);
            let _guard = watch_counter(&counter, probe.clone(), QUIET);

            counter.set(5);
            sleep(Duration::from_millis(350)).await;
            settle().await;

            assert_eq!(probe.calls(), 1);
            assert_eq!(counter.get(), 5);
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn disposed_counter_watcher_fires_nothing() {
        run_local(async {
            let probe = FakeProbe::healthy();
            let counter = signal(0i64);
            let guard = watch_counter(&counter, probe.clone(), QUIET);

            counter.set(1);
            guard.run();

            sleep(Duration::from_secs(1)).await;
            settle().await;
            assert_eq!(probe.calls(), 0);
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn failed_toggle_check_reverts_flag() {
        run_local(async {
            let probe = FakeProbe::scripted(&[false], Duration::from_millis(50));
            let flag = signal(true);
            let _guard = watch_toggle(&flag, probe.clone());

            flag.set(false);
            sleep(Duration::from_millis(200)).await;
            settle().await;

            assert!(flag.get());
            // the revert itself must not trigger another attempt
            assert_eq!(probe.calls(), 1);
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn successful_toggle_check_keeps_new_value() {
        run_local(async {
            let probe = FakeProbe::scripted(&[true], Duration::from_millis(50));
            let flag = signal(true);
            let _guard = watch_toggle(&flag, probe.clone());

            flag.set(false);
            sleep(Duration::from_millis(200)).await;
            settle().await;

            assert!(!flag.get());
            assert_eq!(probe.calls(), 1);
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn result_after_teardown_never_mutates_state() {
        run_local(async {
            let probe = FakeProbe::scripted(&[false], Duration::from_millis(50));
            let flag = signal(true);
            let guard = watch_toggle(&flag, probe.clone());

            // toggle, then immediate unmount while the check is in flight
            flag.set(false);
            guard.run();

            sleep(Duration::from_millis(200)).await;
            settle().await;

            assert!(!flag.get());
            assert_eq!(probe.calls(), 1);
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_toggle_result_is_discarded() {
        run_local(async {
            // first check would fail and revert; it must lose to the newer change
            let probe = FakeProbe::scripted(&[false, true], Duration::from_millis(50));
            let flag = signal(true);
            let _guard = watch_toggle(&flag, probe.clone());

            flag.set(false);
            sleep(Duration::from_millis(20)).await;
            flag.set(true);

            sleep(Duration::from_millis(200)).await;
            settle().await;

            assert!(flag.get());
            assert_eq!(probe.calls(), 2);
        })
        .await;
    }
}
