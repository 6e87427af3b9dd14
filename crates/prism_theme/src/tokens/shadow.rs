//! Shadow tokens for theming

use super::DesignToken;

/// Elevation ladder keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowToken {
    None,
    Elevation1,
    Elevation2,
    Elevation4,
    Elevation8,
}

impl DesignToken for ShadowToken {
    fn all() -> &'static [Self] {
        const ALL: [ShadowToken; 5] = [
            ShadowToken::None,
            ShadowToken::Elevation1,
            ShadowToken::Elevation2,
            ShadowToken::Elevation4,
            ShadowToken::Elevation8,
        ];
        &ALL
    }

    fn path(self) -> &'static [&'static str] {
        match self {
            ShadowToken::None => &["shadow", "none"],
            ShadowToken::Elevation1 => &["shadow", "elevation1"],
            ShadowToken::Elevation2 => &["shadow", "elevation2"],
            ShadowToken::Elevation4 => &["shadow", "elevation4"],
            ShadowToken::Elevation8 => &["shadow", "elevation8"],
        }
    }
}

/// Complete set of shadow tokens, as CSS `box-shadow` values
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShadowTokens {
    pub none: &'static str,
    pub elevation1: &'static str,
    pub elevation2: &'static str,
    pub elevation4: &'static str,
    pub elevation8: &'static str,
}

impl ShadowTokens {
    /// Get shadow by token key
    pub fn get(&self, token: ShadowToken) -> &'static str {
        match token {
            ShadowToken::None => self.none,
            ShadowToken::Elevation1 => self.elevation1,
            ShadowToken::Elevation2 => self.elevation2,
            ShadowToken::Elevation4 => self.elevation4,
            ShadowToken::Elevation8 => self.elevation8,
        }
    }
}
