//! Document root abstraction
//!
//! The provider applies a theme by writing inline custom properties, one
//! data attribute, and a font class onto the document root. [`DocumentRoot`]
//! is that surface; a browser host implements it over `document.documentElement`,
//! and [`StyleRoot`] keeps the same state in memory for native hosts, static
//! rendering, and tests.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::projector::CssVariables;

/// Mutable view of the document root element.
pub trait DocumentRoot {
    /// Set an inline custom property (`--name: value`).
    fn set_property(&mut self, name: &str, value: &str);

    /// Remove an inline custom property. Missing properties are ignored.
    fn remove_property(&mut self, name: &str);

    fn set_attribute(&mut self, name: &str, value: &str);

    /// Add a class. Adding a class that is already present is a no-op.
    fn add_class(&mut self, class: &str);

    /// Remove a class. Missing classes are ignored.
    fn remove_class(&mut self, class: &str);
}

impl<R: DocumentRoot + ?Sized> DocumentRoot for &mut R {
    fn set_property(&mut self, name: &str, value: &str) {
        (**self).set_property(name, value)
    }

    fn remove_property(&mut self, name: &str) {
        (**self).remove_property(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        (**self).set_attribute(name, value)
    }

    fn add_class(&mut self, class: &str) {
        (**self).add_class(class)
    }

    fn remove_class(&mut self, class: &str) {
        (**self).remove_class(class)
    }
}

/// In-memory root element.
#[derive(Clone, Debug, Default)]
pub struct StyleRoot {
    properties: IndexMap<String, String>,
    attributes: FxHashMap<String, String>,
    classes: Vec<String>,
}

impl StyleRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an inline custom property value
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(|s| s.as_str())
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(|s| s.as_str())
    }

    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Classes in insertion order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Snapshot of the inline custom properties
    pub fn variables(&self) -> CssVariables {
        let mut vars = CssVariables::new();
        for (name, value) in &self.properties {
            vars.insert(name.as_str(), value.as_str());
        }
        vars
    }

    /// Render the inline properties as a `:root { ... }` rule
    pub fn to_css(&self) -> String {
        self.variables().to_css_block(":root")
    }
}

impl DocumentRoot for StyleRoot {
    fn set_property(&mut self, name: &str, value: &str) {
        match self.properties.get_mut(name) {
            Some(existing) => {
                existing.clear();
                existing.push_str(value);
            }
            None => {
                self.properties.insert(name.to_string(), value.to_string());
            }
        }
    }

    fn remove_property(&mut self, name: &str) {
        self.properties.shift_remove(name);
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn properties_keep_first_insertion_position() {
        let mut root = StyleRoot::new();
        root.set_property("--a", "1");
        root.set_property("--b", "2");
        root.set_property("--a", "3");

        assert_eq!(root.property_names().collect::<Vec<_>>(), ["--a", "--b"]);
        assert_eq!(root.property("--a"), Some("3"));

        root.remove_property("--a");
        root.remove_property("--missing");
        assert_eq!(root.property_count(), 1);
    }

    #[test]
    fn classes_are_a_set() {
        let mut root = StyleRoot::new();
        root.add_class("font-glass");
        root.add_class("font-glass");
        root.add_class("antialiased");
        assert_eq!(root.classes(), ["font-glass", "antialiased"]);

        root.remove_class("font-glass");
        root.remove_class("font-neo");
        assert_eq!(root.classes(), ["antialiased"]);
    }

    #[test]
    fn to_css_renders_root_rule() {
        let mut root = StyleRoot::new();
        root.set_property("--radius-md", "8px");
        root.set_attribute("data-theme", "material");
        assert_eq!(root.to_css(), ":root {\n  --radius-md: 8px;\n}");
        assert_eq!(root.attribute("data-theme"), Some("material"));
    }
}
