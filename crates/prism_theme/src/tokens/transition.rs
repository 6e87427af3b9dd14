//! Transition tokens: durations and easing curves

use super::DesignToken;

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TransitionToken {
    DurationFast,
    DurationBase,
    DurationSlow,
    EasingStandard,
    EasingEmphasized,
}

impl DesignToken for TransitionToken {
    fn all() -> &'static [Self] {
        const ALL: [TransitionToken; 5] = [
            TransitionToken::DurationFast,
            TransitionToken::DurationBase,
            TransitionToken::DurationSlow,
            TransitionToken::EasingStandard,
            TransitionToken::EasingEmphasized,
        ];
        &ALL
    }

    fn path(self) -> &'static [&'static str] {
        match self {
            TransitionToken::DurationFast => &["duration", "fast"],
            TransitionToken::DurationBase => &["duration", "base"],
            TransitionToken::DurationSlow => &["duration", "slow"],
            TransitionToken::EasingStandard => &["easing", "standard"],
            TransitionToken::EasingEmphasized => &["easing", "emphasized"],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DurationScale {
    pub fast: &'static str,
    pub base: &'static str,
    pub slow: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EasingCurves {
    pub standard: &'static str,
    pub emphasized: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTokens {
    pub duration: DurationScale,
    pub easing: EasingCurves,
}

impl TransitionTokens {
    pub fn get(&self, token: TransitionToken) -> &'static str {
        match token {
            TransitionToken::DurationFast => self.duration.fast,
            TransitionToken::DurationBase => self.duration.base,
            TransitionToken::DurationSlow => self.duration.slow,
            TransitionToken::EasingStandard => self.easing.standard,
            TransitionToken::EasingEmphasized => self.easing.emphasized,
        }
    }

    /// A `transition` shorthand for `property` using the base duration and
    /// standard easing, written with `var()` references.
    pub fn shorthand_var(property: &str) -> String {
        format!(
            "{} {} {}",
            property,
            TransitionToken::DurationBase.var(),
            TransitionToken::EasingStandard.var()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_references_base_duration_and_standard_easing() {
        assert_eq!(
            TransitionTokens::shorthand_var("opacity"),
            "opacity var(--duration-base) var(--easing-standard)"
        );
    }
}
