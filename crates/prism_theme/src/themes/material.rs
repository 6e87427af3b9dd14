//! Material theme
//!
//! Tonal surfaces with a Material 3 style purple primary and the classic
//! umbra/penumbra elevation shadows.

use super::{BASE_FONT_SIZES, BASE_LINE_HEIGHTS, BASE_SPACING};
use crate::bundle::DesignTokenBundle;
use crate::tokens::*;

pub static MATERIAL: DesignTokenBundle = DesignTokenBundle {
    name: "Material",
    colors: ColorTokens {
        background: BackgroundColors {
            base: "#fef7ff",
            surface: "#ffffff",
            surface_variant: "#e7e0ec",
        },
        text: TextColors {
            primary: "rgba(0, 0, 0, 0.87)",
            secondary: "rgba(0, 0, 0, 0.6)",
            tertiary: "rgba(0, 0, 0, 0.45)",
            disabled: "rgba(0, 0, 0, 0.38)",
        },
        accent: AccentColors {
            primary: "#6750a4",
            primary_hover: "#5b4397",
            secondary: "#625b71",
            success: "#2e7d32",
            warning: "#ed6c02",
            danger: "#d32f2f",
            info: "#0288d1",
        },
        border: BorderColors {
            default: "#cac4d0",
            strong: "#79747e",
            light: "#e7e0ec",
        },
    },
    shadows: ShadowTokens {
        none: "none",
        elevation1: "0 1px 2px rgba(0, 0, 0, 0.3), 0 1px 3px 1px rgba(0, 0, 0, 0.15)",
        elevation2: "0 1px 2px rgba(0, 0, 0, 0.3), 0 2px 6px 2px rgba(0, 0, 0, 0.15)",
        elevation4: "0 2px 3px rgba(0, 0, 0, 0.3), 0 6px 10px 4px rgba(0, 0, 0, 0.15)",
        elevation8: "0 4px 4px rgba(0, 0, 0, 0.3), 0 8px 12px 6px rgba(0, 0, 0, 0.15)",
    },
    spacing: BASE_SPACING,
    radius: RadiusTokens {
        none: "0",
        sm: "4px",
        md: "8px",
        lg: "12px",
        xl: "28px",
        full: "9999px",
    },
    typography: TypographyTokens {
        font_size: BASE_FONT_SIZES,
        font_weight: FontWeightScale {
            regular: "400",
            medium: "500",
            semibold: "500",
            bold: "700",
        },
        line_height: BASE_LINE_HEIGHTS,
    },
    effects: None,
    transitions: TransitionTokens {
        duration: DurationScale {
            fast: "100ms",
            base: "200ms",
            slow: "300ms",
        },
        easing: EasingCurves {
            standard: "cubic-bezier(0.2, 0, 0, 1)",
            emphasized: "cubic-bezier(0.05, 0.7, 0.1, 1)",
        },
    },
};
