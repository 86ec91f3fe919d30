//! Changelog types

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::grouping::GroupedChangelog;

/// A commit that passed classification, reduced to what rendering needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedCommit {
    /// Original commit hash (full)
    pub hash: String,
    /// Category identifier from the taxonomy (feat, fix, etc.)
    pub category: String,
    /// First line of the message without the `type: ` prefix
    pub message: String,
    /// Commit day, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Author name
    pub author: String,
}

/// A rendered changelog, one entry per output line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Create a document with a single title line
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            lines: vec![title.into()],
        }
    }

    /// Append a line
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// All lines, in order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the document has no lines at all
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Check if anything beyond the title was rendered
    pub fn has_entries(&self) -> bool {
        self.lines.len() > 1
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Result of one generation run
#[derive(Debug, Clone, Serialize)]
pub struct Changelog {
    /// Classified commits grouped by date and category
    pub grouped: GroupedChangelog,
    /// Rendered document
    pub document: Document,
    /// Number of commits read from the source
    pub scanned: usize,
    /// Number of commits that matched a category
    pub matched: usize,
}

impl Changelog {
    /// Check if no commit matched any category
    ///
    /// An empty changelog is a valid outcome: its document holds only the
    /// title line.
    pub fn is_empty(&self) -> bool {
        self.matched == 0
    }
}
