//! Instance-owned change subscriptions
//!
//! A [`Listeners`] list belongs to exactly one store. Notifications are
//! synchronous and fire-and-forget. Handlers are snapshotted before delivery,
//! so a handler may re-query its store, subscribe, or unsubscribe while being
//! notified.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Handle returned by [`Listeners::subscribe`]
    pub struct SubscriptionId;
}

type Handler<T> = Rc<dyn Fn(&T)>;

/// Subscription list delivering `&T` to every registered handler.
pub struct Listeners<T> {
    handlers: RefCell<SlotMap<SubscriptionId, Handler<T>>>,
}

impl<T> Listeners<T> {
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(SlotMap::with_key()),
        }
    }

    /// Register a handler. It stays registered until [`Self::unsubscribe`].
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&T) + 'static,
    {
        self.handlers.borrow_mut().insert(Rc::new(handler))
    }

    /// Remove a handler. Returns `false` if it was already removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.handlers.borrow_mut().remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.handlers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.borrow().is_empty()
    }

    /// Deliver `value` to every handler registered at the time of the call.
    pub fn notify(&self, value: &T) {
        let snapshot: SmallVec<[Handler<T>; 4]> =
            self.handlers.borrow().values().cloned().collect();
        for handler in snapshot {
            handler(value);
        }
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.len())
            .finish()
    }
}
