//! Theme-specific effect tokens
//!
//! Effects only exist for themes that need them (backdrop blur for glass, an
//! inset highlight for neumorphic surfaces). Absent or empty values are never
//! projected, so a theme without effects emits no `--effect-*` variables.

use super::DesignToken;

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum EffectToken {
    BackdropBlur,
    SurfaceOpacity,
    Highlight,
}

impl DesignToken for EffectToken {
    fn all() -> &'static [Self] {
        const ALL: [EffectToken; 3] = [
            EffectToken::BackdropBlur,
            EffectToken::SurfaceOpacity,
            EffectToken::Highlight,
        ];
        &ALL
    }

    fn path(self) -> &'static [&'static str] {
        match self {
            EffectToken::BackdropBlur => &["effect", "backdropBlur"],
            EffectToken::SurfaceOpacity => &["effect", "surfaceOpacity"],
            EffectToken::Highlight => &["effect", "highlight"],
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectTokens {
    pub backdrop_blur: Option<&'static str>,
    pub surface_opacity: Option<&'static str>,
    pub highlight: Option<&'static str>,
}

impl EffectTokens {
    /// Get an effect value. Empty strings are treated as absent.
    pub fn get(&self, token: EffectToken) -> Option<&'static str> {
        let value = match token {
            EffectToken::BackdropBlur => self.backdrop_blur,
            EffectToken::SurfaceOpacity => self.surface_opacity,
            EffectToken::Highlight => self.highlight,
        };
        value.filter(|v| !v.trim().is_empty())
    }
}
