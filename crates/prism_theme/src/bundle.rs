//! Design token bundles

use crate::tokens::*;

/// The complete set of design tokens for one visual style.
///
/// Every section except `effects` is required, so every theme defines the
/// same closed set of CSS variables and components never special-case a
/// missing one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DesignTokenBundle {
    /// Display name
    pub name: &'static str,
    pub colors: ColorTokens,
    pub shadows: ShadowTokens,
    pub spacing: SpacingTokens,
    pub radius: RadiusTokens,
    pub typography: TypographyTokens,
    pub effects: Option<EffectTokens>,
    pub transitions: TransitionTokens,
}

impl DesignTokenBundle {
    pub fn color(&self, token: ColorToken) -> &'static str {
        self.colors.get(token)
    }

    pub fn shadow(&self, token: ShadowToken) -> &'static str {
        self.shadows.get(token)
    }

    pub fn spacing(&self, token: SpacingToken) -> &'static str {
        self.spacing.get(token)
    }

    pub fn radius(&self, token: RadiusToken) -> &'static str {
        self.radius.get(token)
    }

    pub fn typography(&self, token: TypographyToken) -> &'static str {
        self.typography.get(token)
    }

    pub fn transition(&self, token: TransitionToken) -> &'static str {
        self.transitions.get(token)
    }

    /// Effect value, if this theme defines a non-empty one
    pub fn effect(&self, token: EffectToken) -> Option<&'static str> {
        self.effects.as_ref().and_then(|effects| effects.get(token))
    }
}
