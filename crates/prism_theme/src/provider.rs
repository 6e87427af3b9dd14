//! Active theme state
//!
//! [`ThemeProvider`] is the single source of truth for which theme is
//! active. It is an explicit instance (no global), owning:
//! - the storage key holding the persisted theme id
//! - the custom properties, data attribute, and font class on the root
//!
//! Storage failures never escape: reads fall back to the configured default
//! and failed writes leave the in-memory state authoritative for the session.

use std::cell::{Cell, Ref, RefCell};

use prism_core::{Listeners, Storage, StorageError, SubscriptionId};
use tracing::{debug, trace, warn};

use crate::bundle::DesignTokenBundle;
use crate::config::ThemeConfig;
use crate::projector::{optional_variable_names, project, CssVariables};
use crate::registry::ThemeName;
use crate::root::DocumentRoot;

/// Resolve the theme to adopt from a raw storage read.
///
/// A valid persisted id wins; a missing entry, an unknown id (e.g. a theme
/// removed in a later version), or a failed read yields `default`.
pub fn resolve_theme(raw: Result<Option<String>, StorageError>, default: ThemeName) -> ThemeName {
    match raw {
        Ok(Some(value)) => ThemeName::from_id(&value).unwrap_or(default),
        Ok(None) | Err(_) => default,
    }
}

pub struct ThemeProvider<S: Storage, R: DocumentRoot> {
    config: ThemeConfig,
    storage: S,
    root: RefCell<R>,

    /// Currently active theme
    active: Cell<ThemeName>,

    /// Variables most recently written to the root, used to clear keys the
    /// next theme does not define
    applied: RefCell<CssVariables>,

    /// Whether the last storage access succeeded
    persistent: Cell<bool>,

    listeners: Listeners<ThemeName>,
}

impl<S: Storage, R: DocumentRoot> ThemeProvider<S, R> {
    /// Initialize from persisted storage and apply the adopted theme to `root`.
    pub fn new(config: ThemeConfig, storage: S, root: R) -> Self {
        let raw = storage.get_item(&config.storage_key);
        let persistent = match &raw {
            Err(e) => {
                warn!(
                    "ThemeProvider: cannot read `{}`, using in-memory theme state: {}",
                    config.storage_key, e
                );
                false
            }
            Ok(Some(value)) if ThemeName::from_id(value).is_none() => {
                debug!(
                    "ThemeProvider: ignoring unknown persisted theme {:?}",
                    value
                );
                true
            }
            Ok(_) => true,
        };

        let theme = resolve_theme(raw, config.default_theme);
        debug!("ThemeProvider::new - adopting {}", theme);

        let provider = Self {
            config,
            storage,
            root: RefCell::new(root),
            active: Cell::new(theme),
            applied: RefCell::new(CssVariables::new()),
            persistent: Cell::new(persistent),
            listeners: Listeners::new(),
        };
        provider.apply(theme);
        provider
    }

    /// Initialize with [`ThemeConfig::default`].
    pub fn with_defaults(storage: S, root: R) -> Self {
        Self::new(ThemeConfig::default(), storage, root)
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    // ========== Active Theme ==========

    /// The active theme
    pub fn active_theme(&self) -> ThemeName {
        self.active.get()
    }

    /// Alias of [`Self::active_theme`] matching the catalog's naming
    pub fn get_active_bundle_name(&self) -> ThemeName {
        self.active_theme()
    }

    /// Token bundle of the active theme
    pub fn active_bundle(&self) -> &'static DesignTokenBundle {
        self.active.get().bundle()
    }

    /// Projected variables of the active theme
    pub fn variables(&self) -> CssVariables {
        project(self.active_bundle())
    }

    /// Switch themes.
    ///
    /// Updates the in-memory state, persists the id, re-projects the bundle
    /// onto the root, swaps the font class, and sets the data attribute.
    /// Subscribers are notified only when the theme actually changed.
    /// Sequential calls are last-write-wins.
    pub fn set_theme(&self, theme: ThemeName) {
        let previous = self.active.replace(theme);
        if previous != theme {
            debug!(
                "ThemeProvider::set_theme - switching from {} to {}",
                previous, theme
            );
        }

        self.persist(theme);
        self.apply(theme);

        if previous != theme {
            self.listeners.notify(&theme);
        }
    }

    /// Switch to the next theme in registry order and return it.
    pub fn cycle_theme(&self) -> ThemeName {
        let next = self.active.get().next();
        self.set_theme(next);
        next
    }

    /// `false` while storage is failing; the session is then in-memory only.
    pub fn is_persistent(&self) -> bool {
        self.persistent.get()
    }

    // ========== Subscriptions ==========

    /// Register a callback invoked with the new theme after each change.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&ThemeName) + 'static,
    {
        self.listeners.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    // ========== Root Access ==========

    /// Borrow the root element
    pub fn root(&self) -> Ref<'_, R> {
        self.root.borrow()
    }

    /// Tear down the provider, returning its storage and root
    pub fn into_parts(self) -> (S, R) {
        (self.storage, self.root.into_inner())
    }

    fn persist(&self, theme: ThemeName) {
        match self.storage.set_item(&self.config.storage_key, theme.id()) {
            Ok(()) => self.persistent.set(true),
            Err(e) => {
                warn!(
                    "ThemeProvider: failed to persist theme `{}`: {}",
                    theme, e
                );
                self.persistent.set(false);
            }
        }
    }

    fn apply(&self, theme: ThemeName) {
        let vars = project(theme.bundle());
        let mut root = self.root.borrow_mut();
        let mut applied = self.applied.borrow_mut();

        for stale in applied.names().filter(|name| !vars.contains(name)) {
            trace!("ThemeProvider: removing {}", stale);
            root.remove_property(stale);
        }
        // A reused root may still carry effects this provider never wrote.
        for name in optional_variable_names() {
            if !vars.contains(&name) {
                root.remove_property(&name);
            }
        }
        for (name, value) in vars.iter() {
            root.set_property(name, value);
        }

        for other in ThemeName::all() {
            root.remove_class(other.font_class());
        }
        root.add_class(theme.font_class());
        root.set_attribute(&self.config.data_attribute, theme.id());

        trace!(
            "ThemeProvider: applied {} variables for {}",
            vars.len(),
            theme
        );
        *applied = vars;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::MemoryStorage;

    #[test]
    fn resolve_prefers_valid_persisted_value() {
        assert_eq!(
            resolve_theme(Ok(Some("neo".to_string())), ThemeName::Glass),
            ThemeName::Neo
        );
    }

    #[test]
    fn resolve_falls_back_on_missing_invalid_or_failed_reads() {
        let default = ThemeName::Minimal;
        assert_eq!(resolve_theme(Ok(None), default), default);
        assert_eq!(
            resolve_theme(Ok(Some("{\"theme\":1}".to_string())), default),
            default
        );
        assert_eq!(
            resolve_theme(Ok(Some("dark".to_string())), default),
            default
        );
        assert_eq!(
            resolve_theme(Err(StorageError::Unavailable), default),
            default
        );
    }

    #[test]
    fn invalid_persisted_value_is_left_in_storage_until_next_write() {
        let storage = MemoryStorage::new();
        storage.set_item("prism-theme", "retro").unwrap();

        let provider = ThemeProvider::with_defaults(&storage, crate::StyleRoot::new());
        assert_eq!(provider.active_theme(), ThemeName::Glass);
        assert!(provider.is_persistent());
        assert_eq!(
            storage.get_item("prism-theme").unwrap().as_deref(),
            Some("retro")
        );

        provider.set_theme(ThemeName::Glass);
        assert_eq!(
            storage.get_item("prism-theme").unwrap().as_deref(),
            Some("glass")
        );
    }
}
