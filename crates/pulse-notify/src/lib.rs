//! # Debounced, cancellable status notification
//!
//! This crate owns the one genuinely stateful behavior of the demo: telling a
//! remote endpoint about local state changes without spamming it, and never
//! letting a stale response mutate state.
//!
//! - [`Debounce`] — a cancellable scheduled-task handle. `schedule` replaces
//!   the pending timer atomically; once the quiet period elapses the attempt
//!   runs to completion and only its *effect* can be suppressed.
//! - [`Epoch`] / [`Liveness`] — a generation counter standing in for the
//!   usual mounted-flag boolean. Every async completion checks its token
//!   before mutating state.
//! - [`StatusProbe`] / [`GraphqlProbe`] — the outbound check, reduced to a
//!   boolean. Failures are logged, never fatal, never retried.
//! - [`watch_counter`] / [`watch_toggle`] — the two notifiers: debounced
//!   fire-and-forget for the counter, immediate check-with-rollback for the
//!   disable-buttons flag.
//!
//! Everything here is `Rc`-based and expects to run on a current-thread
//! runtime inside a `tokio::task::LocalSet`.

pub mod debounce;
pub mod liveness;
pub mod notifier;
pub mod status;
pub mod tests;

pub use debounce::{DEFAULT_QUIET_PERIOD, Debounce};
pub use liveness::{Epoch, Liveness};
pub use notifier::{watch_counter, watch_toggle};
pub use status::{GraphqlProbe, NotifyError, STATUS_ENDPOINT, StatusProbe};
