use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use crate::{error::ModelError, observer::Observer};

/// Owns the click count and the observers interested in it.
///
/// The model only keeps weak handles: whoever builds an observer owns it,
/// and a dropped observer simply stops receiving notifications.
#[derive(Default)]
pub struct ClickCounterModel {
    count: Cell<u64>,
    observers: RefCell<Vec<Weak<dyn Observer>>>,
}

impl ClickCounterModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_count(&self) -> u64 {
        self.count.get()
    }

    pub fn increment(&self) {
        self.count.set(self.count.get().saturating_add(1));
        self.notify_observers();
    }

    /// Always notifies, even when the count was already zero.
    pub fn reset(&self) {
        self.count.set(0);
        self.notify_observers();
    }

    pub fn add_observer(&self, observer: Weak<dyn Observer>) -> Result<(), ModelError> {
        if observer.strong_count() == 0 {
            return Err(ModelError::type_mismatch(
                "handle does not point at a live observer",
            ));
        }
        self.observers.borrow_mut().push(observer);
        tracing::debug!(observers = self.observer_count(), "observer registered");
        Ok(())
    }

    pub fn subscribe<O: Observer + 'static>(&self, observer: &Rc<O>) -> Result<(), ModelError> {
        let handle = Rc::downgrade(observer);
        self.add_observer(handle)
    }

    /// Removes the first registration of `observer`; unknown handles are ignored.
    pub fn remove_observer(&self, observer: &Weak<dyn Observer>) {
        let mut observers = self.observers.borrow_mut();
        if let Some(index) = observers
            .iter()
            .position(|registered| Weak::ptr_eq(registered, observer))
        {
            observers.remove(index);
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    fn notify_observers(&self) {
        // Snapshot so an observer may call back into the model while being notified.
        let observers = self.observers.borrow().clone();
        let mut dropped = 0usize;
        for observer in &observers {
            match observer.upgrade() {
                Some(observer) => observer.update(),
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            self.observers
                .borrow_mut()
                .retain(|observer| observer.strong_count() > 0);
            tracing::debug!(dropped, "pruned dropped observers");
        }
    }
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
