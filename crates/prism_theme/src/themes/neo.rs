//! Neumorphism theme
//!
//! Soft extruded surfaces: background and surface share one tone and depth
//! comes from paired light/dark shadows.

use super::{BASE_DURATIONS, BASE_FONT_SIZES, BASE_FONT_WEIGHTS, BASE_LINE_HEIGHTS, BASE_SPACING};
use crate::bundle::DesignTokenBundle;
use crate::tokens::*;

pub static NEO: DesignTokenBundle = DesignTokenBundle {
    name: "Neumorphism",
    colors: ColorTokens {
        background: BackgroundColors {
            base: "#e0e5ec",
            surface: "#e0e5ec",
            surface_variant: "#d1d9e6",
        },
        text: TextColors {
            primary: "#2d3748",
            secondary: "#4a5568",
            tertiary: "#718096",
            disabled: "#a0aec0",
        },
        accent: AccentColors {
            primary: "#6c63ff",
            primary_hover: "#5a52e0",
            secondary: "#38b2ac",
            success: "#48bb78",
            warning: "#ed8936",
            danger: "#e53e3e",
            info: "#4299e1",
        },
        border: BorderColors {
            default: "rgba(163, 177, 198, 0.4)",
            strong: "rgba(163, 177, 198, 0.7)",
            light: "rgba(255, 255, 255, 0.6)",
        },
    },
    shadows: ShadowTokens {
        none: "none",
        elevation1: "3px 3px 6px #b8bec7, -3px -3px 6px #ffffff",
        elevation2: "6px 6px 12px #b8bec7, -6px -6px 12px #ffffff",
        elevation4: "9px 9px 18px #b8bec7, -9px -9px 18px #ffffff",
        elevation8: "14px 14px 28px #b8bec7, -14px -14px 28px #ffffff",
    },
    spacing: BASE_SPACING,
    radius: RadiusTokens {
        none: "0",
        sm: "8px",
        md: "12px",
        lg: "20px",
        xl: "28px",
        full: "9999px",
    },
    typography: TypographyTokens {
        font_size: BASE_FONT_SIZES,
        font_weight: BASE_FONT_WEIGHTS,
        line_height: BASE_LINE_HEIGHTS,
    },
    effects: Some(EffectTokens {
        backdrop_blur: None,
        surface_opacity: None,
        highlight: Some("inset 3px 3px 6px #b8bec7, inset -3px -3px 6px #ffffff"),
    }),
    transitions: TransitionTokens {
        duration: BASE_DURATIONS,
        easing: EasingCurves {
            standard: "ease-in-out",
            emphasized: "cubic-bezier(0.34, 1.56, 0.64, 1)",
        },
    },
};
