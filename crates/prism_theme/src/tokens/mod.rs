//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a design system:
//! - Colors (background, text, accent, border)
//! - Shadows (elevation ladder)
//! - Spacing
//! - Border radii
//! - Typography (font sizes, weights, line heights)
//! - Transitions (durations and easings)
//! - Effects (optional, theme specific)
//!
//! Every value is a CSS string. Each token group has a key enum implementing
//! [`DesignToken`], which is how components refer to a value: by its CSS
//! variable, never by the literal.

mod color;
mod effects;
mod radius;
mod shadow;
mod spacing;
mod transition;
mod typography;

pub use color::*;
pub use effects::*;
pub use radius::*;
pub use shadow::*;
pub use spacing::*;
pub use transition::*;
pub use typography::*;

use crate::naming::{var_reference, variable_name};

/// A token key that maps to one CSS custom property.
pub trait DesignToken: Copy + Eq + std::hash::Hash + std::fmt::Debug + 'static {
    /// Every key of this group, in schema order
    fn all() -> &'static [Self];

    /// Schema key path, camelCase segments (e.g. `["color", "text", "primary"]`)
    fn path(self) -> &'static [&'static str];

    /// Custom-property name, e.g. `--color-text-primary`
    fn variable_name(self) -> String {
        variable_name(self.path())
    }

    /// `var()` reference for use in component styles
    fn var(self) -> String {
        var_reference(&self.variable_name())
    }
}
