//! Prefix parser
//!
//! Classifies commits whose message starts with `<category>:` and strips
//! `<category>: ` from the first line to get the changelog text.

use regex::Regex;
use tracing::trace;

use super::CommitParser;
use crate::taxonomy::{Category, Taxonomy};
use crate::types::NormalizedCommit;
use datelog_core::error::{ChangelogError, ExtractionFailure};
use datelog_core::{CommitInfo, Result};

/// Parser for `type: message` commits
pub struct PrefixParser {
    taxonomy: Taxonomy,
    pattern: Regex,
}

impl PrefixParser {
    /// Create a parser for the given taxonomy
    pub fn new(taxonomy: Taxonomy) -> Result<Self> {
        let alternation = taxonomy
            .ids()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");

        // Anchored at position 0: leading whitespace never matches
        let pattern = Regex::new(&format!("^(?:{alternation}):"))
            .map_err(|e| ChangelogError::InvalidTaxonomy(e.to_string()))?;

        Ok(Self { taxonomy, pattern })
    }

    /// The taxonomy this parser classifies against
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Find the category whose prefix starts the message
    pub fn classify(&self, message: &str) -> Option<&Category> {
        let found = self.pattern.find(message)?;
        let id = &message[..found.end() - 1];
        self.taxonomy.get(id)
    }

    /// Strip the category delimiter from the first line of a message
    ///
    /// Trailing whitespace is trimmed; nothing after the delimiter yields an
    /// empty message.
    pub fn extract_message(
        category: &Category,
        first_line: &str,
    ) -> std::result::Result<String, ExtractionFailure> {
        let delimiter = category.delimiter();

        let Some(rest) = first_line.strip_prefix(delimiter.as_str()) else {
            return Err(ExtractionFailure::MissingDelimiter(delimiter));
        };

        if rest.contains(delimiter.as_str()) {
            return Err(ExtractionFailure::AmbiguousDelimiter(delimiter));
        }

        Ok(rest.trim_end().to_string())
    }
}

impl CommitParser for PrefixParser {
    fn parse(&self, commit: &CommitInfo) -> Result<Option<NormalizedCommit>> {
        let Some(category) = self.classify(&commit.message) else {
            trace!(hash = %commit.hash, "commit outside taxonomy, skipping");
            return Ok(None);
        };

        let message = Self::extract_message(category, commit.first_line()).map_err(|reason| {
            ChangelogError::MessageExtraction {
                hash: commit.hash.clone(),
                category: category.id.clone(),
                reason,
            }
        })?;

        Ok(Some(NormalizedCommit {
            hash: commit.hash.clone(),
            category: category.id.clone(),
            message,
            date: commit.date(),
            author: commit.author.clone(),
        }))
    }
}
