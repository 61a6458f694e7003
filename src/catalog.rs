//! Material catalog: which images the material panel offers per category.
//!
//! The catalog only names resources. Loading them is the job of
//! [`crate::loader`]; the engine never sees a locator, only decoded images.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::EditorError;

/// Shown by the host when a category has nothing to offer.
pub const EMPTY_CATEGORY_MESSAGE: &str = "No materials available for this category.";

/// Category name → ordered image locators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: BTreeMap<String, Vec<String>>,
}

impl Catalog {
    /// The stock avatar parts shipped with the editor.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        catalog.insert("head", numbered("heads", &[1, 2, 3, 4, 5, 6, 11, 12, 13, 14]));
        catalog.insert("hands", numbered("hands", &(1..=16).collect::<Vec<_>>()));
        catalog.insert("body", numbered("body", &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 14, 15]));
        catalog.insert("legs", numbered("legs", &(1..=9).collect::<Vec<_>>()));
        catalog.insert("accessories", numbered("assets", &(1..=16).collect::<Vec<_>>()));
        catalog.insert("patterns", numbered("pattern", &(1..=13).collect::<Vec<_>>()));
        catalog
    }

    /// Parse a `{"category": ["locator", ...]}` object.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Config`] when the JSON does not have that shape.
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replace the locators for `category`.
    pub fn insert(&mut self, category: impl Into<String>, locators: Vec<String>) {
        self.categories.insert(category.into(), locators);
    }

    /// Locators for `category` in display order; empty for unknown categories.
    #[must_use]
    pub fn materials(&self, category: &str) -> &[String] {
        self.categories.get(category).map(Vec::as_slice).unwrap_or_default()
    }

    /// The notice to show instead of an empty material panel.
    #[must_use]
    pub fn empty_message(&self, category: &str) -> Option<&'static str> {
        self.materials(category).is_empty().then_some(EMPTY_CATEGORY_MESSAGE)
    }

    /// Category names in sorted order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn numbered(dir: &str, numbers: &[u32]) -> Vec<String> {
    numbers.iter().map(|n| format!("{dir}/{n}.png")).collect()
}
