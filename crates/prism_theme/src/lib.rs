//! Prism Theme System
//!
//! Design-token theming for the Prism component catalog: four visual styles
//! (glassmorphism, neumorphism, material, minimalism) described by one typed
//! token schema and applied to a document as CSS custom properties.
//!
//! # Overview
//!
//! - **Design tokens**: Colors, shadows, spacing, radii, typography,
//!   transitions, and optional effects, all as CSS strings
//! - **Registry**: One static bundle per [`ThemeName`]
//! - **Projector**: [`project`] flattens a bundle into `--category-key`
//!   custom properties
//! - **Provider**: [`ThemeProvider`] persists the active theme and applies it
//!   to a [`DocumentRoot`]
//!
//! # Quick Start
//!
//! ```rust
//! use prism_core::MemoryStorage;
//! use prism_theme::{ThemeName, ThemeProvider, StyleRoot};
//!
//! let provider = ThemeProvider::with_defaults(MemoryStorage::new(), StyleRoot::new());
//! assert_eq!(provider.active_theme(), ThemeName::Glass);
//!
//! provider.set_theme(ThemeName::Material);
//! assert_eq!(provider.root().attribute("data-theme"), Some("material"));
//! assert_eq!(provider.root().property("--radius-md"), Some("8px"));
//! ```
//!
//! # Consuming tokens
//!
//! Components never embed literal values. They refer to a token's variable:
//!
//! ```rust
//! use prism_theme::{ColorToken, DesignToken, RadiusToken};
//!
//! let card = format!(
//!     "background: {}; border-radius: {};",
//!     ColorToken::BackgroundSurface.var(),
//!     RadiusToken::Md.var(),
//! );
//! assert_eq!(
//!     card,
//!     "background: var(--color-background-surface); border-radius: var(--radius-md);"
//! );
//! ```
//!
//! Variable names on both sides come from [`naming::variable_name`], so the
//! projector and its consumers cannot drift apart.

pub mod bundle;
pub mod config;
pub mod naming;
pub mod projector;
pub mod provider;
pub mod registry;
pub mod root;
pub mod themes;
pub mod tokens;

// Re-export commonly used types
pub use bundle::DesignTokenBundle;
pub use config::ThemeConfig;
pub use naming::kebab_case;
pub use projector::{optional_variable_names, project, required_variable_names, CssVariables};
pub use provider::{resolve_theme, ThemeProvider};
pub use registry::{get_bundle, ThemeName, UnknownTheme};
pub use root::{DocumentRoot, StyleRoot};
pub use tokens::*;
