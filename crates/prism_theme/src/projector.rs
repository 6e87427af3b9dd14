//! Token-to-CSS-variable projection
//!
//! [`project`] flattens a [`DesignTokenBundle`] into custom properties. The
//! output order follows the schema (colors, shadows, spacing, radius,
//! typography, transitions, effects) so rendered CSS is stable.

use std::fmt::Write as _;

use indexmap::IndexMap;

use crate::bundle::DesignTokenBundle;
use crate::tokens::*;

/// Flat, ordered mapping of custom-property name (with `--`) to value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CssVariables {
    vars: IndexMap<String, String>,
}

impl CssVariables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable, replacing any previous value for `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Get a value by full name (`--color-text-primary`)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(|s| s.as_str())
    }

    /// Get the value for a token key
    pub fn get_token<T: DesignToken>(&self, token: T) -> Option<&str> {
        self.get(&token.variable_name())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Variable names in projection order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(|s| s.as_str())
    }

    /// `(name, value)` pairs in projection order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render a CSS rule block, e.g. `:root { --radius-md: 8px; }`.
    ///
    /// Used to inline the initial theme into a static page.
    pub fn to_css_block(&self, selector: &str) -> String {
        let mut css = String::with_capacity(self.vars.len() * 40);
        css.push_str(selector);
        css.push_str(" {\n");
        for (name, value) in &self.vars {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push('}');
        css
    }
}

impl<'a> IntoIterator for &'a CssVariables {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter()
    }
}

fn push_group<T: DesignToken>(vars: &mut CssVariables, value: impl Fn(T) -> &'static str) {
    for token in T::all() {
        vars.insert(token.variable_name(), value(*token));
    }
}

/// Project a bundle onto its CSS custom properties.
///
/// Pure: the same bundle always yields the same mapping. Effect keys are
/// emitted only when the theme defines a non-empty value.
pub fn project(bundle: &DesignTokenBundle) -> CssVariables {
    let mut vars = CssVariables::new();

    push_group(&mut vars, |t: ColorToken| bundle.colors.get(t));
    push_group(&mut vars, |t: ShadowToken| bundle.shadows.get(t));
    push_group(&mut vars, |t: SpacingToken| bundle.spacing.get(t));
    push_group(&mut vars, |t: RadiusToken| bundle.radius.get(t));
    push_group(&mut vars, |t: TypographyToken| bundle.typography.get(t));
    push_group(&mut vars, |t: TransitionToken| bundle.transitions.get(t));

    for token in EffectToken::all() {
        if let Some(value) = bundle.effect(*token) {
            vars.insert(token.variable_name(), value);
        }
    }

    vars
}

/// The closed set of variable names every bundle must produce.
pub fn required_variable_names() -> Vec<String> {
    fn names<T: DesignToken>(out: &mut Vec<String>) {
        out.extend(T::all().iter().map(|t| t.variable_name()));
    }

    let mut out = Vec::new();
    names::<ColorToken>(&mut out);
    names::<ShadowToken>(&mut out);
    names::<SpacingToken>(&mut out);
    names::<RadiusToken>(&mut out);
    names::<TypographyToken>(&mut out);
    names::<TransitionToken>(&mut out);
    out
}

/// Every variable name an effect may produce.
pub fn optional_variable_names() -> Vec<String> {
    EffectToken::all().iter().map(|t| t.variable_name()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ThemeName;
    use pretty_assertions::assert_eq;

    #[test]
    fn projection_is_deterministic() {
        for theme in ThemeName::all() {
            let first = project(theme.bundle());
            let second = project(theme.bundle());
            assert_eq!(first, second);
            assert_eq!(
                first.names().collect::<Vec<_>>(),
                second.names().collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn names_follow_the_kebab_rule() {
        let vars = project(ThemeName::Glass.bundle());
        assert_eq!(vars.get("--color-text-primary"), Some("#f8fafc"));
        assert_eq!(vars.get("--color-accent-primary-hover"), Some("#7c3aed"));
        assert_eq!(
            vars.get("--color-background-surface-variant"),
            Some("rgba(255, 255, 255, 0.14)")
        );
        assert_eq!(vars.get("--spacing-2xl"), Some("48px"));
        assert_eq!(vars.get("--font-size-base"), Some("1rem"));
        assert_eq!(vars.get("--line-height-relaxed"), Some("1.75"));
        assert_eq!(vars.get("--duration-fast"), Some("150ms"));
        assert_eq!(vars.get("--effect-backdrop-blur"), Some("blur(16px)"));
        assert_eq!(vars.get("--radius-md"), Some("16px"));
    }

    #[test]
    fn themes_without_effects_emit_no_effect_variables() {
        let vars = project(ThemeName::Material.bundle());
        assert!(vars.names().all(|name| !name.starts_with("--effect-")));
        assert_eq!(vars.len(), required_variable_names().len());
    }

    #[test]
    fn partial_effects_only_emit_present_keys() {
        let vars = project(ThemeName::Neo.bundle());
        assert!(vars.contains("--effect-highlight"));
        assert!(!vars.contains("--effect-backdrop-blur"));
        assert!(!vars.contains("--effect-surface-opacity"));
    }

    #[test]
    fn empty_effect_values_are_skipped() {
        let mut bundle = ThemeName::Glass.bundle().clone();
        bundle.effects = Some(EffectTokens {
            backdrop_blur: Some(""),
            surface_opacity: None,
            highlight: Some("inset 0 1px 0 white"),
        });
        let vars = project(&bundle);
        assert!(!vars.contains("--effect-backdrop-blur"));
        assert_eq!(vars.get("--effect-highlight"), Some("inset 0 1px 0 white"));
    }

    #[test]
    fn css_block_lists_every_variable() {
        let mut vars = CssVariables::new();
        vars.insert("--radius-md", "8px");
        vars.insert("--color-text-primary", "#111");
        assert_eq!(
            vars.to_css_block(":root"),
            ":root {\n  --radius-md: 8px;\n  --color-text-primary: #111;\n}"
        );
    }

    #[test]
    fn token_lookup_matches_name_lookup() {
        let vars = project(ThemeName::Minimal.bundle());
        assert_eq!(vars.get_token(RadiusToken::Md), Some("4px"));
        assert_eq!(vars.get_token(ColorToken::AccentPrimary), Some("#111111"));
        assert_eq!(vars.get_token(EffectToken::Highlight), None);
    }
}
