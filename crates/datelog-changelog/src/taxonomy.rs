//! Commit categories and their display order

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use datelog_core::error::{ChangelogError, Result};

/// Categories recognized by default, in display order
///
/// `docs` is deliberately absent so documentation-only commits never show up
/// in the generated changelog.
pub const CONVENTIONAL_CATEGORIES: &[(&str, &str)] = &[
    ("build", "Build"),
    ("ci", "CI"),
    ("feat", "Features"),
    ("fix", "Fixes"),
    ("perf", "Performance"),
    ("refactor", "Refactor"),
    ("style", "Styles"),
    ("test", "Tests"),
];

/// A commit category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Identifier matched against the commit message prefix (e.g. `feat`)
    pub id: String,
    /// Section title in the rendered changelog (e.g. `Features`)
    pub label: String,
}

impl Category {
    /// Create a new category
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Prefix the classifier looks for, e.g. `feat:`
    pub fn prefix(&self) -> String {
        format!("{}:", self.id)
    }

    /// Delimiter stripped from the first line, e.g. `feat: `
    pub fn delimiter(&self) -> String {
        format!("{}: ", self.id)
    }
}

/// Ordered set of categories
///
/// Order is significant: sections are rendered in taxonomy order regardless
/// of when their commits were made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Taxonomy {
    categories: Vec<Category>,
}

impl Taxonomy {
    /// Build a taxonomy from `(id, label)` pairs, in display order
    pub fn new<I, S, L>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, L)>,
        S: Into<String>,
        L: Into<String>,
    {
        let categories: Vec<Category> = pairs
            .into_iter()
            .map(|(id, label)| Category::new(id, label))
            .collect();

        validate(&categories)?;
        Ok(Self { categories })
    }

    /// The default table: build, ci, feat, fix, perf, refactor, style, test
    pub fn conventional() -> Self {
        Self {
            categories: CONVENTIONAL_CATEGORIES
                .iter()
                .map(|(id, label)| Category::new(*id, *label))
                .collect(),
        }
    }

    /// Look up a category by identifier
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Categories in display order
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Identifiers in display order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.id.as_str())
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if the taxonomy has no categories
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::conventional()
    }
}

fn validate(categories: &[Category]) -> Result<()> {
    if categories.is_empty() {
        return Err(ChangelogError::InvalidTaxonomy("no categories declared".to_string()).into());
    }

    let mut seen = HashSet::new();
    for category in categories {
        if category.id.is_empty() {
            return Err(ChangelogError::InvalidTaxonomy("empty category id".to_string()).into());
        }

        // A colon or blank inside an id would let one prefix swallow another
        if category
            .id
            .chars()
            .any(|c| c == ':' || c.is_whitespace())
        {
            return Err(ChangelogError::InvalidTaxonomy(format!(
                "category id `{}` contains ':' or whitespace",
                category.id
            ))
            .into());
        }

        if category.label.trim().is_empty() {
            return Err(ChangelogError::InvalidTaxonomy(format!(
                "category `{}` has an empty label",
                category.id
            ))
            .into());
        }

        if !seen.insert(category.id.as_str()) {
            return Err(ChangelogError::InvalidTaxonomy(format!(
                "category `{}` declared twice",
                category.id
            ))
            .into());
        }
    }

    Ok(())
}
