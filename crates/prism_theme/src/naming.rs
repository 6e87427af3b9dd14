//! CSS custom-property naming
//!
//! Token keys are written in camelCase in the schema (`surfaceVariant`,
//! `fontSize`). Both the projector and the component-facing token enums build
//! variable names through [`variable_name`], so producer and consumer always
//! agree on the exact bytes.

/// Convert a camelCase key to kebab-case.
///
/// A hyphen is inserted before an uppercase ASCII letter that follows a
/// lowercase letter or digit, then the whole key is lowercased. Underscores
/// and spaces become hyphens. Digits never start a new word, so `elevation4`
/// and `2xl` are unchanged.
pub fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;

    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            if matches!(prev, Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit()) {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else if ch == '_' || ch == ' ' {
            out.push('-');
        } else {
            out.push(ch);
        }
        prev = Some(ch);
    }

    out
}

/// Build a custom-property name (`--a-b-c`) from a schema key path.
pub fn variable_name(path: &[&str]) -> String {
    let mut name = String::from("--");
    for (i, segment) in path.iter().enumerate() {
        if i > 0 {
            name.push('-');
        }
        name.push_str(&kebab_case(segment));
    }
    name
}

/// Wrap a custom-property name in a `var()` reference.
pub fn var_reference(name: &str) -> String {
    format!("var({name})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_keys() {
        assert_eq!(kebab_case("surfaceVariant"), "surface-variant");
        assert_eq!(kebab_case("primaryHover"), "primary-hover");
        assert_eq!(kebab_case("fontSize"), "font-size");
        assert_eq!(kebab_case("backdropBlur"), "backdrop-blur");
    }

    #[test]
    fn already_lowercase_keys_are_unchanged() {
        assert_eq!(kebab_case("primary"), "primary");
        assert_eq!(kebab_case("color"), "color");
        assert_eq!(kebab_case("font-size"), "font-size");
        assert_eq!(kebab_case(""), "");
    }

    #[test]
    fn digits_do_not_split_words() {
        assert_eq!(kebab_case("elevation4"), "elevation4");
        assert_eq!(kebab_case("2xl"), "2xl");
        assert_eq!(kebab_case("3xl"), "3xl");
        assert_eq!(kebab_case("level2Shadow"), "level2-shadow");
    }

    #[test]
    fn uppercase_runs_stay_together() {
        assert_eq!(kebab_case("backdropURL"), "backdrop-url");
        assert_eq!(kebab_case("Primary"), "primary");
    }

    #[test]
    fn separators_become_hyphens() {
        assert_eq!(kebab_case("line_height"), "line-height");
        assert_eq!(kebab_case("line height"), "line-height");
    }

    #[test]
    fn variable_names_join_segments() {
        assert_eq!(
            variable_name(&["color", "text", "primary"]),
            "--color-text-primary"
        );
        assert_eq!(
            variable_name(&["color", "background", "surfaceVariant"]),
            "--color-background-surface-variant"
        );
        assert_eq!(variable_name(&["fontSize", "2xl"]), "--font-size-2xl");
        assert_eq!(variable_name(&["radius", "md"]), "--radius-md");
    }

    #[test]
    fn var_reference_wraps_name() {
        assert_eq!(
            var_reference("--color-accent-primary"),
            "var(--color-accent-primary)"
        );
    }
}
