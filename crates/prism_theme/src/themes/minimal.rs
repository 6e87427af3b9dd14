//! Minimalism theme

use super::{BASE_DURATIONS, BASE_FONT_SIZES, BASE_LINE_HEIGHTS, BASE_SPACING};
use crate::bundle::DesignTokenBundle;
use crate::tokens::*;

pub static MINIMAL: DesignTokenBundle = DesignTokenBundle {
    name: "Minimalism",
    colors: ColorTokens {
        background: BackgroundColors {
            base: "#ffffff",
            surface: "#ffffff",
            surface_variant: "#f5f5f5",
        },
        text: TextColors {
            primary: "#111111",
            secondary: "#555555",
            tertiary: "#888888",
            disabled: "#bbbbbb",
        },
        accent: AccentColors {
            primary: "#111111",
            primary_hover: "#333333",
            secondary: "#666666",
            success: "#15803d",
            warning: "#b45309",
            danger: "#b91c1c",
            info: "#1d4ed8",
        },
        border: BorderColors {
            default: "#e5e5e5",
            strong: "#111111",
            light: "#f0f0f0",
        },
    },
    shadows: ShadowTokens {
        none: "none",
        elevation1: "0 1px 2px rgba(0, 0, 0, 0.04)",
        elevation2: "0 1px 3px rgba(0, 0, 0, 0.06)",
        elevation4: "0 2px 6px rgba(0, 0, 0, 0.08)",
        elevation8: "0 4px 12px rgba(0, 0, 0, 0.1)",
    },
    spacing: BASE_SPACING,
    radius: RadiusTokens {
        none: "0",
        sm: "2px",
        md: "4px",
        lg: "6px",
        xl: "8px",
        full: "9999px",
    },
    typography: TypographyTokens {
        font_size: BASE_FONT_SIZES,
        font_weight: FontWeightScale {
            regular: "300",
            medium: "400",
            semibold: "500",
            bold: "600",
        },
        line_height: BASE_LINE_HEIGHTS,
    },
    effects: None,
    transitions: TransitionTokens {
        duration: BASE_DURATIONS,
        easing: EasingCurves {
            standard: "ease",
            emphasized: "ease-out",
        },
    },
};
