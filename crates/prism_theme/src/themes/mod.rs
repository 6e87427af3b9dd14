//! Built-in theme bundles
//!
//! One static [`DesignTokenBundle`](crate::DesignTokenBundle) per visual
//! style. Scales shared by several styles live here.

mod glass;
mod material;
mod minimal;
mod neo;

pub use glass::GLASS;
pub use material::MATERIAL;
pub use minimal::MINIMAL;
pub use neo::NEO;

use crate::tokens::*;

/// 4px-based spacing scale
pub(crate) const BASE_SPACING: SpacingTokens = SpacingTokens {
    xs: "4px",
    sm: "8px",
    md: "16px",
    lg: "24px",
    xl: "32px",
    xxl: "48px",
    xxxl: "64px",
};

pub(crate) const BASE_FONT_SIZES: FontSizeScale = FontSizeScale {
    xs: "0.75rem",
    sm: "0.875rem",
    base: "1rem",
    lg: "1.125rem",
    xl: "1.25rem",
    xxl: "1.5rem",
    xxxl: "1.875rem",
};

pub(crate) const BASE_FONT_WEIGHTS: FontWeightScale = FontWeightScale {
    regular: "400",
    medium: "500",
    semibold: "600",
    bold: "700",
};

pub(crate) const BASE_LINE_HEIGHTS: LineHeightScale = LineHeightScale {
    tight: "1.25",
    normal: "1.5",
    relaxed: "1.75",
};

pub(crate) const BASE_DURATIONS: DurationScale = DurationScale {
    fast: "150ms",
    base: "250ms",
    slow: "400ms",
};
