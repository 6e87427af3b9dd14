//! Typography tokens: font sizes, weights, and line heights

use super::DesignToken;

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TypographyToken {
    // Font sizes
    FontSizeXs,
    FontSizeSm,
    FontSizeBase,
    FontSizeLg,
    FontSizeXl,
    FontSize2xl,
    FontSize3xl,

    // Font weights
    FontWeightRegular,
    FontWeightMedium,
    FontWeightSemibold,
    FontWeightBold,

    // Line heights
    LineHeightTight,
    LineHeightNormal,
    LineHeightRelaxed,
}

impl DesignToken for TypographyToken {
    fn all() -> &'static [Self] {
        const ALL: [TypographyToken; 14] = [
            TypographyToken::FontSizeXs,
            TypographyToken::FontSizeSm,
            TypographyToken::FontSizeBase,
            TypographyToken::FontSizeLg,
            TypographyToken::FontSizeXl,
            TypographyToken::FontSize2xl,
            TypographyToken::FontSize3xl,
            TypographyToken::FontWeightRegular,
            TypographyToken::FontWeightMedium,
            TypographyToken::FontWeightSemibold,
            TypographyToken::FontWeightBold,
            TypographyToken::LineHeightTight,
            TypographyToken::LineHeightNormal,
            TypographyToken::LineHeightRelaxed,
        ];
        &ALL
    }

    fn path(self) -> &'static [&'static str] {
        match self {
            TypographyToken::FontSizeXs => &["fontSize", "xs"],
            TypographyToken::FontSizeSm => &["fontSize", "sm"],
            TypographyToken::FontSizeBase => &["fontSize", "base"],
            TypographyToken::FontSizeLg => &["fontSize", "lg"],
            TypographyToken::FontSizeXl => &["fontSize", "xl"],
            TypographyToken::FontSize2xl => &["fontSize", "2xl"],
            TypographyToken::FontSize3xl => &["fontSize", "3xl"],
            TypographyToken::FontWeightRegular => &["fontWeight", "regular"],
            TypographyToken::FontWeightMedium => &["fontWeight", "medium"],
            TypographyToken::FontWeightSemibold => &["fontWeight", "semibold"],
            TypographyToken::FontWeightBold => &["fontWeight", "bold"],
            TypographyToken::LineHeightTight => &["lineHeight", "tight"],
            TypographyToken::LineHeightNormal => &["lineHeight", "normal"],
            TypographyToken::LineHeightRelaxed => &["lineHeight", "relaxed"],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontSizeScale {
    pub xs: &'static str,
    pub sm: &'static str,
    pub base: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    pub xxl: &'static str,
    pub xxxl: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontWeightScale {
    pub regular: &'static str,
    pub medium: &'static str,
    pub semibold: &'static str,
    pub bold: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineHeightScale {
    pub tight: &'static str,
    pub normal: &'static str,
    pub relaxed: &'static str,
}

/// Complete set of typography tokens
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypographyTokens {
    pub font_size: FontSizeScale,
    pub font_weight: FontWeightScale,
    pub line_height: LineHeightScale,
}

impl TypographyTokens {
    pub fn get(&self, token: TypographyToken) -> &'static str {
        match token {
            TypographyToken::FontSizeXs => self.font_size.xs,
            TypographyToken::FontSizeSm => self.font_size.sm,
            TypographyToken::FontSizeBase => self.font_size.base,
            TypographyToken::FontSizeLg => self.font_size.lg,
            TypographyToken::FontSizeXl => self.font_size.xl,
            TypographyToken::FontSize2xl => self.font_size.xxl,
            TypographyToken::FontSize3xl => self.font_size.xxxl,
            TypographyToken::FontWeightRegular => self.font_weight.regular,
            TypographyToken::FontWeightMedium => self.font_weight.medium,
            TypographyToken::FontWeightSemibold => self.font_weight.semibold,
            TypographyToken::FontWeightBold => self.font_weight.bold,
            TypographyToken::LineHeightTight => self.line_height.tight,
            TypographyToken::LineHeightNormal => self.line_height.normal,
            TypographyToken::LineHeightRelaxed => self.line_height.relaxed,
        }
    }
}
