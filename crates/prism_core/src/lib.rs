//! Prism Core Runtime
//!
//! This crate provides the foundational primitives shared by the Prism theme
//! and collection crates:
//!
//! - **Storage**: A local-storage style key/value interface with in-memory and
//!   file-backed implementations
//! - **Listeners**: Instance-owned change subscriptions (no global event bus)
//! - **Config**: TOML config loading with a shared error type
//!
//! # Example
//!
//! ```rust
//! use prism_core::{Listeners, MemoryStorage, Storage};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let storage = MemoryStorage::new();
//! storage.set_item("greeting", "hello").unwrap();
//! assert_eq!(storage.get_item("greeting").unwrap().as_deref(), Some("hello"));
//!
//! let listeners = Listeners::<()>::new();
//! let hits = Rc::new(Cell::new(0));
//! let counter = hits.clone();
//! listeners.subscribe(move |_| counter.set(counter.get() + 1));
//! listeners.notify(&());
//! assert_eq!(hits.get(), 1);
//! ```

pub mod config;
pub mod error;
pub mod listeners;
pub mod storage;

pub use config::{from_toml_file, from_toml_str, ConfigError};
pub use error::StorageError;
pub use listeners::{Listeners, SubscriptionId};
pub use storage::{FileStorage, MemoryStorage, Storage};
