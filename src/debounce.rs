//! Trailing-edge debounce.
//!
//! Each [`Debouncer::call`] cancels the pending invocation (if any) and
//! schedules a fresh one `wait_ms` later, so a burst of calls collapses into a
//! single callback receiving the last call's arguments. Clones share the same
//! pending slot.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::platform::{Platform, TimerId};

pub struct Debouncer<A> {
    platform: Rc<dyn Platform>,
    wait_ms: u32,
    callback: Rc<dyn Fn(A)>,
    pending: Rc<Cell<Option<TimerId>>>,
}

impl<A> Clone for Debouncer<A> {
    fn clone(&self) -> Self {
        Self {
            platform: Rc::clone(&self.platform),
            wait_ms: self.wait_ms,
            callback: Rc::clone(&self.callback),
            pending: Rc::clone(&self.pending),
        }
    }
}

impl<A: 'static> Debouncer<A> {
    pub fn new(platform: Rc<dyn Platform>, wait_ms: u32, callback: impl Fn(A) + 'static) -> Self {
        Self { platform, wait_ms, callback: Rc::new(callback), pending: Rc::new(Cell::new(None)) }
    }

    pub fn call(&self, args: A) {
        self.cancel();
        let callback = Rc::clone(&self.callback);
        let pending = Rc::clone(&self.pending);
        let timer = self.platform.set_timeout(
            self.wait_ms,
            Box::new(move || {
                pending.set(None);
                callback(args);
            }),
        );
        self.pending.set(Some(timer));
    }

    /// Drop the pending invocation without running it.
    pub fn cancel(&self) {
        if let Some(timer) = self.pending.take() {
            self.platform.clear_timer(timer);
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    #[must_use]
    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }
}
