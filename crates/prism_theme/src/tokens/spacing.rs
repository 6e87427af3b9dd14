//! Spacing tokens

use super::DesignToken;

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    Xxxl,
}

impl DesignToken for SpacingToken {
    fn all() -> &'static [Self] {
        const ALL: [SpacingToken; 7] = [
            SpacingToken::Xs,
            SpacingToken::Sm,
            SpacingToken::Md,
            SpacingToken::Lg,
            SpacingToken::Xl,
            SpacingToken::Xxl,
            SpacingToken::Xxxl,
        ];
        &ALL
    }

    fn path(self) -> &'static [&'static str] {
        match self {
            SpacingToken::Xs => &["spacing", "xs"],
            SpacingToken::Sm => &["spacing", "sm"],
            SpacingToken::Md => &["spacing", "md"],
            SpacingToken::Lg => &["spacing", "lg"],
            SpacingToken::Xl => &["spacing", "xl"],
            SpacingToken::Xxl => &["spacing", "2xl"],
            SpacingToken::Xxxl => &["spacing", "3xl"],
        }
    }
}

/// Spacing scale as CSS lengths
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpacingTokens {
    pub xs: &'static str,
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    pub xxl: &'static str,
    pub xxxl: &'static str,
}

impl SpacingTokens {
    pub fn get(&self, token: SpacingToken) -> &'static str {
        match token {
            SpacingToken::Xs => self.xs,
            SpacingToken::Sm => self.sm,
            SpacingToken::Md => self.md,
            SpacingToken::Lg => self.lg,
            SpacingToken::Xl => self.xl,
            SpacingToken::Xxl => self.xxl,
            SpacingToken::Xxxl => self.xxxl,
        }
    }
}
