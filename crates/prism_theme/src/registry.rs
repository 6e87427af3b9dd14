//! Built-in theme registry.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bundle::DesignTokenBundle;
use crate::themes;

/// Identifier of a built-in theme.
///
/// The set is closed: lookups by `ThemeName` cannot fail. Strings from
/// storage or config go through [`ThemeName::from_id`] first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Frosted translucent surfaces (default).
    #[default]
    Glass,
    /// Soft extruded neumorphic surfaces.
    Neo,
    /// Material Design tonal surfaces.
    Material,
    /// Flat monochrome minimalism.
    Minimal,
}

/// A string that is not a built-in theme id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}`")]
pub struct UnknownTheme(pub String);

impl ThemeName {
    /// Stable id used for persistence and the `data-theme` attribute.
    pub fn id(self) -> &'static str {
        match self {
            Self::Glass => "glass",
            Self::Neo => "neo",
            Self::Material => "material",
            Self::Minimal => "minimal",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        self.bundle().name
    }

    /// Root class selecting this theme's font family.
    pub fn font_class(self) -> &'static str {
        match self {
            Self::Glass => "font-glass",
            Self::Neo => "font-neo",
            Self::Material => "font-material",
            Self::Minimal => "font-minimal",
        }
    }

    /// Full theme list, in switcher order.
    pub fn all() -> &'static [ThemeName] {
        const THEMES: [ThemeName; 4] = [
            ThemeName::Glass,
            ThemeName::Neo,
            ThemeName::Material,
            ThemeName::Minimal,
        ];
        &THEMES
    }

    /// Parse a theme id. Surrounding whitespace is ignored; matching is exact.
    pub fn from_id(id: &str) -> Option<ThemeName> {
        let id = id.trim();
        Self::all().iter().copied().find(|theme| theme.id() == id)
    }

    /// The token bundle for this theme.
    pub fn bundle(self) -> &'static DesignTokenBundle {
        match self {
            Self::Glass => &themes::GLASS,
            Self::Neo => &themes::NEO,
            Self::Material => &themes::MATERIAL,
            Self::Minimal => &themes::MINIMAL,
        }
    }

    /// The theme after this one in [`ThemeName::all`] order, wrapping around.
    pub fn next(self) -> ThemeName {
        let all = Self::all();
        let index = all.iter().position(|t| *t == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }
}

impl Display for ThemeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ThemeName {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// Convenience free function for ergonomic imports.
pub fn get_bundle(name: ThemeName) -> &'static DesignTokenBundle {
    name.bundle()
}
