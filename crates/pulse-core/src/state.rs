use crate::{Signal, signal};

/// Reducer-style state: a pure transition function over tagged events.
pub trait StateHolder: 'static {
    type State: Clone + 'static;
    type Event;

    fn initial_state() -> Self::State;
    fn reduce(state: &Self::State, event: Self::Event) -> Self::State;
}

/// Holds the current state of a [`StateHolder`] behind a [`Signal`], so the
/// state can be watched like any other observable value.
pub struct Store<H: StateHolder> {
    state: Signal<H::State>,
}

impl<H: StateHolder> Store<H> {
    pub fn new() -> Self {
        Self {
            state: signal(H::initial_state()),
        }
    }

    pub fn dispatch(&self, event: H::Event) {
        let next = H::reduce(&self.state.get(), event);
        self.state.set(next);
    }

    pub fn get(&self) -> H::State {
        self.state.get()
    }

    /// A handle to the underlying state signal, for `watch` and friends.
    pub fn signal(&self) -> Signal<H::State> {
        self.state.clone()
    }
}

impl<H: StateHolder> Default for Store<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: StateHolder> Clone for Store<H> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
