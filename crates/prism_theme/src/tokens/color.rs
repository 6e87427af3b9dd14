//! Color tokens for theming

use super::DesignToken;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Background colors
    BackgroundBase,
    BackgroundSurface,
    BackgroundSurfaceVariant,

    // Text colors
    TextPrimary,
    TextSecondary,
    TextTertiary,
    TextDisabled,

    // Accent colors
    AccentPrimary,
    AccentPrimaryHover,
    AccentSecondary,
    AccentSuccess,
    AccentWarning,
    AccentDanger,
    AccentInfo,

    // Border colors
    BorderDefault,
    BorderStrong,
    BorderLight,
}

impl DesignToken for ColorToken {
    fn all() -> &'static [Self] {
        const ALL: [ColorToken; 17] = [
            ColorToken::BackgroundBase,
            ColorToken::BackgroundSurface,
            ColorToken::BackgroundSurfaceVariant,
            ColorToken::TextPrimary,
            ColorToken::TextSecondary,
            ColorToken::TextTertiary,
            ColorToken::TextDisabled,
            ColorToken::AccentPrimary,
            ColorToken::AccentPrimaryHover,
            ColorToken::AccentSecondary,
            ColorToken::AccentSuccess,
            ColorToken::AccentWarning,
            ColorToken::AccentDanger,
            ColorToken::AccentInfo,
            ColorToken::BorderDefault,
            ColorToken::BorderStrong,
            ColorToken::BorderLight,
        ];
        &ALL
    }

    fn path(self) -> &'static [&'static str] {
        match self {
            ColorToken::BackgroundBase => &["color", "background", "base"],
            ColorToken::BackgroundSurface => &["color", "background", "surface"],
            ColorToken::BackgroundSurfaceVariant => &["color", "background", "surfaceVariant"],
            ColorToken::TextPrimary => &["color", "text", "primary"],
            ColorToken::TextSecondary => &["color", "text", "secondary"],
            ColorToken::TextTertiary => &["color", "text", "tertiary"],
            ColorToken::TextDisabled => &["color", "text", "disabled"],
            ColorToken::AccentPrimary => &["color", "accent", "primary"],
            ColorToken::AccentPrimaryHover => &["color", "accent", "primaryHover"],
            ColorToken::AccentSecondary => &["color", "accent", "secondary"],
            ColorToken::AccentSuccess => &["color", "accent", "success"],
            ColorToken::AccentWarning => &["color", "accent", "warning"],
            ColorToken::AccentDanger => &["color", "accent", "danger"],
            ColorToken::AccentInfo => &["color", "accent", "info"],
            ColorToken::BorderDefault => &["color", "border", "default"],
            ColorToken::BorderStrong => &["color", "border", "strong"],
            ColorToken::BorderLight => &["color", "border", "light"],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackgroundColors {
    pub base: &'static str,
    pub surface: &'static str,
    pub surface_variant: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub tertiary: &'static str,
    pub disabled: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccentColors {
    pub primary: &'static str,
    pub primary_hover: &'static str,
    pub secondary: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub danger: &'static str,
    pub info: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BorderColors {
    pub default: &'static str,
    pub strong: &'static str,
    pub light: &'static str,
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorTokens {
    pub background: BackgroundColors,
    pub text: TextColors,
    pub accent: AccentColors,
    pub border: BorderColors,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> &'static str {
        match token {
            ColorToken::BackgroundBase => self.background.base,
            ColorToken::BackgroundSurface => self.background.surface,
            ColorToken::BackgroundSurfaceVariant => self.background.surface_variant,
            ColorToken::TextPrimary => self.text.primary,
            ColorToken::TextSecondary => self.text.secondary,
            ColorToken::TextTertiary => self.text.tertiary,
            ColorToken::TextDisabled => self.text.disabled,
            ColorToken::AccentPrimary => self.accent.primary,
            ColorToken::AccentPrimaryHover => self.accent.primary_hover,
            ColorToken::AccentSecondary => self.accent.secondary,
            ColorToken::AccentSuccess => self.accent.success,
            ColorToken::AccentWarning => self.accent.warning,
            ColorToken::AccentDanger => self.accent.danger,
            ColorToken::AccentInfo => self.accent.info,
            ColorToken::BorderDefault => self.border.default,
            ColorToken::BorderStrong => self.border.strong,
            ColorToken::BorderLight => self.border.light,
        }
    }
}
