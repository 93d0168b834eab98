use std::cell::RefCell;

use crate::{Dispose, Signal};

/// Observes a signal and calls `callback(new, old)` on every change.
///
/// The value at attach time is the baseline: the callback is not called for
/// it, only for later writes, and only when `new != old` (a `set` to an equal
/// value is ignored). The returned guard unsubscribes.
pub fn watch<T, F>(signal: &Signal<T>, callback: F) -> Dispose
where
    T: Clone + PartialEq + 'static,
    F: FnMut(&T, &T) + 'static,
{
    let prev = RefCell::new(signal.get());
    // Subscribers are `Fn`; the stateful callback lives behind a RefCell.
    let callback = RefCell::new(callback);

    let id = signal.subscribe(move |next| {
        let mut prev = prev.borrow_mut();
        if *prev == *next {
            return;
        }
        let old = std::mem::replace(&mut *prev, next.clone());
        drop(prev);
        (callback.borrow_mut())(next, &old);
    });

    let signal = signal.clone();
    Dispose::new(move || signal.unsubscribe(id))
}
