use std::cell::RefCell;
use std::rc::Rc;

/// Cleanup guard. Cloneable; the underlying closure runs at most once no
/// matter how many clones call [`Dispose::run`].
#[derive(Clone)]
pub struct Dispose(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl Dispose {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(Box::new(f)))))
    }

    pub fn run(&self) {
        if let Some(f) = self.0.borrow_mut().take() {
            f()
        }
    }

    /// Combines two guards: running the result runs `self`, then `other`.
    pub fn also(self, other: Dispose) -> Dispose {
        Dispose::new(move || {
            self.run();
            other.run();
        })
    }
}

/// Runs `f()` immediately and returns its cleanup guard.
///
/// If a [`Scope`](crate::Scope) is current, the cleanup is also registered
/// with it, so disposing the scope tears the effect down.
pub fn effect<F>(f: F) -> Dispose
where
    F: FnOnce() -> Dispose + 'static,
{
    let d = f();

    if let Some(scope) = crate::scope::current_scope() {
        let d2 = d.clone();
        scope.add_disposer(move || d2.run());
    }

    d
}

/// Wraps a plain closure as the cleanup of an [`effect`].
pub fn on_unmount(f: impl FnOnce() + 'static) -> Dispose {
    Dispose::new(f)
}
