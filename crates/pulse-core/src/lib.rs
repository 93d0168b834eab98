//! # Signals, scopes, and effects
//!
//! Pulse's kernel is a small single-threaded reactive core. There are four
//! main pieces:
//!
//! - `Signal<T>` — observable, reactive value.
//! - `Scope` — lifecycle owner; disposing it tears down everything registered
//!   while it was current.
//! - `effect` / `scoped_effect` — side-effects with cleanup.
//! - `Store<H>` — reducer-style state behind a signal.
//!
//! ## Signals
//!
//! `Signal<T>` is a cloneable handle to a piece of state:
//!
//! ```rust
//! use pulse_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! Subscribers run synchronously after every write. `watch` builds on this
//! with change detection that skips the attach-time value:
//!
//! ```rust
//! use pulse_core::*;
//!
//! let count = signal(0);
//! let guard = watch(&count, |new, old| {
//!     log::info!("count: {old} -> {new}");
//! });
//! count.set(1); // callback fires
//! guard.run();  // detached
//! ```
//!
//! ## Scopes and effects
//!
//! Use `effect` / `scoped_effect` for one-off side-effects with cleanups:
//!
//! ```rust
//! use pulse_core::*;
//!
//! let scope = Scope::new();
//! scope.run(|| {
//!     scoped_effect(|| {
//!         log::info!("mounted");
//!         on_unmount(|| log::info!("unmounted"))
//!     });
//! });
//! scope.dispose(); // runs the unmount cleanup
//! ```
//!
//! Long-running tasks (network, timers) should hang their teardown off a
//! scope this way so everything cleans up when the session that owns them
//! disappears; `pulse-notify` does exactly that for its notifiers.
//!
//! ## Reducer stores
//!
//! `StateHolder` is a pure transition function over tagged events; `Store`
//! applies it and exposes the state as a signal:
//!
//! ```rust
//! use pulse_core::*;
//!
//! struct Counter;
//! enum Event { Add }
//!
//! impl StateHolder for Counter {
//!     type State = i64;
//!     type Event = Event;
//!     fn initial_state() -> i64 { 0 }
//!     fn reduce(state: &i64, _event: Event) -> i64 { state + 1 }
//! }
//!
//! let store = Store::<Counter>::new();
//! store.dispatch(Event::Add);
//! assert_eq!(store.get(), 1);
//! ```

pub mod effects;
pub mod scope;
pub mod signal;
pub mod state;
pub mod watch;

pub use effects::{Dispose, effect, on_unmount};
pub use scope::{Scope, current_scope, scoped_effect};
pub use signal::{Signal, SubId, signal};
pub use state::{StateHolder, Store};
pub use watch::watch;
