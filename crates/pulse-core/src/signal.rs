use std::cell::RefCell;
use std::rc::Rc;

use slab::Slab;

/// Subscription handle returned by [`Signal::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubId(usize);

/// Cloneable handle to an observable value.
///
/// Writes notify subscribers synchronously, in subscription order. Subscribers
/// may read the signal but must not write back into the same signal from
/// inside the notification (use a deferred task for that).
#[derive(Clone)]
pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    subs: Slab<Rc<dyn Fn(&T)>>,
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            subs: Slab::new(),
        })))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().value.clone()
    }

    pub fn set(&self, v: T) {
        self.0.borrow_mut().value = v;
        self.notify();
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        f(&mut self.0.borrow_mut().value);
        self.notify();
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        SubId(self.0.borrow_mut().subs.insert(Rc::new(f)))
    }

    /// Detaches a subscriber. Unknown ids are ignored, so a disposer may run
    /// after the signal has already dropped its subscribers.
    pub fn unsubscribe(&self, id: SubId) {
        let _ = self.0.borrow_mut().subs.try_remove(id.0);
    }

    fn notify(&self) {
        // Snapshot the subscriber list so a subscriber adding or removing
        // subscriptions doesn't alias the slab borrow.
        let subs: Vec<Rc<dyn Fn(&T)>> = self
            .0
            .borrow()
            .subs
            .iter()
            .map(|(_, s)| s.clone())
            .collect();
        for s in subs {
            s(&self.0.borrow().value);
        }
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
