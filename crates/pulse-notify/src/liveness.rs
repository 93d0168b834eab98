use std::cell::Cell;
use std::rc::Rc;

/// Generation counter shared between an effect owner and its async
/// completions. Bumping it invalidates every outstanding [`Liveness`] token.
#[derive(Clone, Default)]
pub struct Epoch(Rc<Cell<u64>>);

impl Epoch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }

    /// Snapshots the current generation.
    pub fn token(&self) -> Liveness {
        Liveness {
            epoch: self.0.clone(),
            seen: self.0.get(),
        }
    }
}

/// Token captured when an attempt is scheduled. Checked before every state
/// mutation an async completion wants to apply: a completion whose token is
/// no longer live belongs to a superseded change or a torn-down owner, and
/// its result must be discarded.
#[derive(Clone)]
pub struct Liveness {
    epoch: Rc<Cell<u64>>,
    seen: u64,
}

impl Liveness {
    pub fn is_live(&self) -> bool {
        self.epoch.get() == self.seen
    }
}
