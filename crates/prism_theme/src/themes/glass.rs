//! Glassmorphism theme
//!
//! Translucent frosted surfaces over a deep indigo backdrop. The only theme
//! that relies on `backdrop-filter`, so it carries the full effects section.

use super::{BASE_DURATIONS, BASE_FONT_SIZES, BASE_FONT_WEIGHTS, BASE_LINE_HEIGHTS, BASE_SPACING};
use crate::bundle::DesignTokenBundle;
use crate::tokens::*;

/// Glass palette
pub mod palette {
    pub const NIGHT: &str = "#0b1020";
    pub const FROST: &str = "rgba(255, 255, 255, 0.08)";
    pub const FROST_STRONG: &str = "rgba(255, 255, 255, 0.14)";
    pub const SNOW: &str = "#f8fafc";
    pub const VIOLET: &str = "#8b5cf6";
    pub const VIOLET_DEEP: &str = "#7c3aed";
    pub const CYAN: &str = "#22d3ee";
}

pub static GLASS: DesignTokenBundle = DesignTokenBundle {
    name: "Glassmorphism",
    colors: ColorTokens {
        background: BackgroundColors {
            base: palette::NIGHT,
            surface: palette::FROST,
            surface_variant: palette::FROST_STRONG,
        },
        text: TextColors {
            primary: palette::SNOW,
            secondary: "rgba(248, 250, 252, 0.72)",
            tertiary: "rgba(248, 250, 252, 0.52)",
            disabled: "rgba(248, 250, 252, 0.32)",
        },
        accent: AccentColors {
            primary: palette::VIOLET,
            primary_hover: palette::VIOLET_DEEP,
            secondary: palette::CYAN,
            success: "#34d399",
            warning: "#fbbf24",
            danger: "#f87171",
            info: "#60a5fa",
        },
        border: BorderColors {
            default: "rgba(255, 255, 255, 0.18)",
            strong: "rgba(255, 255, 255, 0.32)",
            light: "rgba(255, 255, 255, 0.08)",
        },
    },
    shadows: ShadowTokens {
        none: "none",
        elevation1: "0 2px 8px rgba(0, 0, 0, 0.18)",
        elevation2: "0 4px 16px rgba(0, 0, 0, 0.22)",
        elevation4: "0 8px 32px rgba(0, 0, 0, 0.28)",
        elevation8: "0 16px 48px rgba(0, 0, 0, 0.36)",
    },
    spacing: BASE_SPACING,
    radius: RadiusTokens {
        none: "0",
        sm: "8px",
        md: "16px",
        lg: "24px",
        xl: "32px",
        full: "9999px",
    },
    typography: TypographyTokens {
        font_size: BASE_FONT_SIZES,
        font_weight: BASE_FONT_WEIGHTS,
        line_height: BASE_LINE_HEIGHTS,
    },
    effects: Some(EffectTokens {
        backdrop_blur: Some("blur(16px)"),
        surface_opacity: Some("0.08"),
        highlight: Some("inset 0 1px 0 rgba(255, 255, 255, 0.24)"),
    }),
    transitions: TransitionTokens {
        duration: BASE_DURATIONS,
        easing: EasingCurves {
            standard: "cubic-bezier(0.4, 0, 0.2, 1)",
            emphasized: "cubic-bezier(0.16, 1, 0.3, 1)",
        },
    },
};
