//! Border radius tokens

use super::DesignToken;

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    None,
    Sm,
    Md,
    Lg,
    Xl,
    Full,
}

impl DesignToken for RadiusToken {
    fn all() -> &'static [Self] {
        const ALL: [RadiusToken; 6] = [
            RadiusToken::None,
            RadiusToken::Sm,
            RadiusToken::Md,
            RadiusToken::Lg,
            RadiusToken::Xl,
            RadiusToken::Full,
        ];
        &ALL
    }

    fn path(self) -> &'static [&'static str] {
        match self {
            RadiusToken::None => &["radius", "none"],
            RadiusToken::Sm => &["radius", "sm"],
            RadiusToken::Md => &["radius", "md"],
            RadiusToken::Lg => &["radius", "lg"],
            RadiusToken::Xl => &["radius", "xl"],
            RadiusToken::Full => &["radius", "full"],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RadiusTokens {
    pub none: &'static str,
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    pub full: &'static str,
}

impl RadiusTokens {
    pub fn get(&self, token: RadiusToken) -> &'static str {
        match token {
            RadiusToken::None => self.none,
            RadiusToken::Sm => self.sm,
            RadiusToken::Md => self.md,
            RadiusToken::Lg => self.lg,
            RadiusToken::Xl => self.xl,
            RadiusToken::Full => self.full,
        }
    }
}
