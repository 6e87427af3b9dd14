//! Prism collection store
//!
//! A user's collection is an ordered set of saved catalog item ids, persisted
//! as a JSON array under one storage key:
//!
//! ```json
//! [{ "id": "button", "addedAt": 1718000000000 }]
//! ```
//!
//! [`CollectionStore`] owns that key and its subscribers. Mutations persist
//! first, then notify; subscribers receive no payload and re-query the store.
//!
//! ```rust
//! use prism_collection::CollectionStore;
//! use prism_core::MemoryStorage;
//!
//! let store = CollectionStore::with_defaults(MemoryStorage::new());
//! store.add("button");
//! store.add("button");
//! assert_eq!(store.count(), 1);
//!
//! store.remove("button");
//! store.remove("button");
//! assert_eq!(store.count(), 0);
//! ```

mod config;
mod item;
mod store;

pub use config::CollectionConfig;
pub use item::CollectionItem;
pub use store::{resolve_items, CollectionStore};
