//! Persisted collection state
//!
//! The in-memory list is loaded once at construction and is authoritative for
//! the session. Every mutation rewrites the whole array under the configured
//! key, then notifies subscribers. Storage failures are logged and dropped.

use std::cell::RefCell;
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use prism_core::{Listeners, Storage, StorageError, SubscriptionId};
use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};

use crate::config::CollectionConfig;
use crate::item::CollectionItem;

type Clock = Box<dyn Fn() -> u64>;

fn system_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(saturating_millis)
        .unwrap_or(0)
}

fn saturating_millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// Resolve the collection from a raw storage read.
///
/// A failed read, a missing key, or a value that is not a JSON array of
/// items all yield an empty list; nothing is partially recovered. Repeated
/// ids keep their first occurrence.
pub fn resolve_items(raw: Result<Option<String>, StorageError>) -> Vec<CollectionItem> {
    let json = match raw {
        Ok(Some(json)) => json,
        Ok(None) | Err(_) => return Vec::new(),
    };

    let mut items: Vec<CollectionItem> = match serde_json::from_str(&json) {
        Ok(items) => items,
        Err(e) => {
            debug!("resolve_items: ignoring malformed collection: {}", e);
            return Vec::new();
        }
    };

    let mut seen = FxHashSet::default();
    items.retain(|item| seen.insert(item.id.clone()));
    items
}

pub struct CollectionStore<S: Storage> {
    config: CollectionConfig,
    storage: S,
    items: RefCell<Vec<CollectionItem>>,
    listeners: Listeners<()>,
    clock: Clock,
}

impl<S: Storage> CollectionStore<S> {
    /// Load the collection persisted under `config.storage_key`.
    pub fn new(config: CollectionConfig, storage: S) -> Self {
        let items = Self::read(&config, &storage);
        debug!(
            "CollectionStore::new - loaded {} items from `{}`",
            items.len(),
            config.storage_key
        );

        Self {
            config,
            storage,
            items: RefCell::new(items),
            listeners: Listeners::new(),
            clock: Box::new(system_clock),
        }
    }

    /// Load with [`CollectionConfig::default`].
    pub fn with_defaults(storage: S) -> Self {
        Self::new(CollectionConfig::default(), storage)
    }

    /// Replace the timestamp source used by [`Self::add`] (milliseconds).
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> u64 + 'static,
    {
        self.clock = Box::new(clock);
        self
    }

    pub fn config(&self) -> &CollectionConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    // ========== Reads ==========

    /// Items in insertion order
    pub fn list(&self) -> Vec<CollectionItem> {
        self.items.borrow().clone()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.borrow().iter().any(|item| item.id == id)
    }

    pub fn count(&self) -> usize {
        self.items.borrow().len()
    }

    // ========== Mutations ==========

    /// Append `id` if absent. Returns `false` (and does nothing) if present.
    pub fn add(&self, id: &str) -> bool {
        if self.contains(id) {
            trace!("CollectionStore::add - `{}` already saved", id);
            return false;
        }

        let added_at = (self.clock)();
        self.items
            .borrow_mut()
            .push(CollectionItem::new(id, added_at));
        debug!("CollectionStore::add - `{}`", id);

        self.commit();
        true
    }

    /// Remove `id` if present. Returns `false` if absent.
    ///
    /// Removing an absent id neither persists nor notifies, matching
    /// [`Self::add`] of a present id. [`Self::clear`] always does both.
    pub fn remove(&self, id: &str) -> bool {
        let removed = {
            let mut items = self.items.borrow_mut();
            let before = items.len();
            items.retain(|item| item.id != id);
            items.len() != before
        };
        if !removed {
            trace!("CollectionStore::remove - `{}` not saved", id);
            return false;
        }
        debug!("CollectionStore::remove - `{}`", id);

        self.commit();
        true
    }

    /// Add `id` if absent, remove it if present. Returns the new membership.
    pub fn toggle(&self, id: &str) -> bool {
        if self.contains(id) {
            self.remove(id);
            false
        } else {
            self.add(id);
            true
        }
    }

    /// Remove every item.
    pub fn clear(&self) {
        let cleared = std::mem::take(&mut *self.items.borrow_mut());
        debug!("CollectionStore::clear - dropped {} items", cleared.len());
        self.commit();
    }

    /// Re-read storage, e.g. after another writer changed the key.
    ///
    /// Subscribers are notified only if the list changed. A failed read
    /// keeps the current items.
    pub fn reload(&self) {
        let fresh = match self.storage.get_item(&self.config.storage_key) {
            Ok(raw) => resolve_items(Ok(raw)),
            Err(e) => {
                warn!(
                    "CollectionStore::reload - cannot read `{}`, keeping {} items: {}",
                    self.config.storage_key,
                    self.count(),
                    e
                );
                return;
            }
        };
        let changed = *self.items.borrow() != fresh;
        if changed {
            debug!("CollectionStore::reload - {} items", fresh.len());
            *self.items.borrow_mut() = fresh;
            self.listeners.notify(&());
        }
    }

    // ========== Subscriptions ==========

    /// Register a callback invoked after each mutation. Callbacks receive no
    /// payload; read the current state from the store.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.listeners.subscribe(move |_: &()| callback())
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Tear down the store, returning its storage
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn read(config: &CollectionConfig, storage: &S) -> Vec<CollectionItem> {
        let raw = storage.get_item(&config.storage_key);
        if let Err(e) = &raw {
            warn!(
                "CollectionStore: cannot read `{}`, starting empty: {}",
                config.storage_key, e
            );
        }
        resolve_items(raw)
    }

    /// Persist, then notify. No borrow is held while subscribers run.
    fn commit(&self) {
        if let Err(e) = self.persist() {
            warn!(
                "CollectionStore: failed to persist `{}`: {}",
                self.config.storage_key, e
            );
        }
        self.listeners.notify(&());
    }

    fn persist(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&*self.items.borrow())?;
        self.storage.set_item(&self.config.storage_key, &json)
    }
}

impl<S: Storage> fmt::Debug for CollectionStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionStore")
            .field("storage_key", &self.config.storage_key)
            .field("items", &*self.items.borrow())
            .field("listeners", &self.listeners)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use prism_core::MemoryStorage;

    fn raw(json: &str) -> Result<Option<String>, StorageError> {
        Ok(Some(json.to_string()))
    }

    #[test]
    fn resolve_reads_a_valid_array() {
        assert_eq!(
            resolve_items(raw(r#"[{"id":"button","addedAt":1},{"id":"card","addedAt":2}]"#)),
            vec![CollectionItem::new("button", 1), CollectionItem::new("card", 2)]
        );
    }

    #[test]
    fn resolve_falls_back_to_empty() {
        assert!(resolve_items(Ok(None)).is_empty());
        assert!(resolve_items(Err(StorageError::Unavailable)).is_empty());
        assert!(resolve_items(raw("")).is_empty());
        assert!(resolve_items(raw("{not json")).is_empty());
        assert!(resolve_items(raw(r#"{"id":"button","addedAt":1}"#)).is_empty());
        // One bad element discards the whole array.
        assert!(resolve_items(raw(r#"[{"id":"button","addedAt":1},{"id":2}]"#)).is_empty());
    }

    #[test]
    fn resolve_keeps_first_duplicate() {
        assert_eq!(
            resolve_items(raw(
                r#"[{"id":"a","addedAt":1},{"id":"b","addedAt":2},{"id":"a","addedAt":3}]"#
            )),
            vec![CollectionItem::new("a", 1), CollectionItem::new("b", 2)]
        );
    }

    #[test]
    fn add_stamps_with_injected_clock() {
        let store = CollectionStore::with_defaults(MemoryStorage::new()).with_clock(|| 1_000);
        assert!(store.add("slider"));
        assert_eq!(store.list(), vec![CollectionItem::new("slider", 1_000)]);
    }

    #[test]
    fn system_clock_is_after_epoch() {
        assert!(system_clock() > 0);
    }

    #[test]
    fn millis_saturate_instead_of_wrapping() {
        assert_eq!(saturating_millis(Duration::from_millis(1_500)), 1_500);
        assert_eq!(saturating_millis(Duration::MAX), u64::MAX);
    }

    #[test]
    fn failed_write_keeps_session_state() {
        let store = CollectionStore::with_defaults(MemoryStorage::with_quota(16));
        assert!(store.add("a-rather-long-component-id"));
        assert!(store.contains("a-rather-long-component-id"));
        assert_eq!(store.storage().get_item("prism-collection").unwrap(), None);
    }
}
