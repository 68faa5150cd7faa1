//! Keyed sections of a header or footer fragment.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sections of a fragment keyed by normalized heading text.
///
/// Each value holds the outer HTML of the sibling elements that followed the
/// heading. Inserting an existing key replaces its content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionMap {
    sections: BTreeMap<String, Vec<String>>,
}

impl SectionMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a section, replacing any earlier one with the same key.
    pub fn insert(&mut self, key: impl Into<String>, nodes: Vec<String>) {
        self.sections.insert(key.into(), nodes);
    }

    /// Get a section's nodes.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.sections.get(key).map(Vec::as_slice)
    }

    /// Get the first present section among several alternative keys.
    pub fn first_of(&self, keys: &[&str]) -> Option<&[String]> {
        keys.iter().find_map(|k| self.get(k))
    }

    /// Check for a section.
    pub fn contains(&self, key: &str) -> bool {
        self.sections.contains_key(key)
    }

    /// Section keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Get the number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if there are no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Joined HTML of one section, for re-parsing.
    pub fn html(&self, key: &str) -> Option<String> {
        self.get(key).map(|nodes| nodes.concat())
    }
}

/// Normalize heading text into a section key.
///
/// Lowercases, trims, and collapses whitespace runs to a single hyphen.
pub fn section_key(heading: &str) -> String {
    heading
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_key() {
        assert_eq!(section_key("Connect With Us"), "connect-with-us");
        assert_eq!(section_key("  About \t MHS \n"), "about-mhs");
        assert_eq!(section_key(""), "");
    }

    #[test]
    fn test_last_write_wins() {
        let mut map = SectionMap::new();
        map.insert("tools", vec!["<p>a</p>".to_string()]);
        map.insert("tools", vec!["<p>b</p>".to_string()]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.html("tools").as_deref(), Some("<p>b</p>"));
    }

    #[test]
    fn test_first_of() {
        let mut map = SectionMap::new();
        map.insert("legal", vec!["<ul></ul>".to_string()]);
        assert!(map.first_of(&["privacy-links", "legal-links", "legal"]).is_some());
        assert!(map.first_of(&["copyright"]).is_none());
    }
}
