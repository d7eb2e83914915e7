//! Minimal shared-state abstraction.
//!
//! The list store, author lookup and delete dialog never own their state
//! directly; they go through a [`StateCell`] so the same logic can drive a
//! plain `Rc<RefCell<_>>` in tests and a reactive signal in the UI. Callers
//! must not hold a borrow across an `.await`: both methods take a closure and
//! release the borrow before returning.

use std::cell::RefCell;
use std::rc::Rc;

pub trait StateCell<T> {
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R;
    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}
