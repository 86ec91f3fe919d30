//! Datelog Changelog - Dated changelog generation
//!
//! This crate classifies commits by their `type: ` prefix, groups them by
//! commit date and category, and renders the result as markdown. It only
//! talks to repositories through [`datelog_core::CommitSource`].

pub mod formatter;
pub mod generator;
pub mod grouping;
pub mod parser;
pub mod taxonomy;
pub mod types;

pub use formatter::{ChangelogFormatter, MarkdownFormatter};
pub use generator::ChangelogGenerator;
pub use grouping::{DateGroup, GroupedChangelog};
pub use parser::{CommitParser, PrefixParser};
pub use taxonomy::{Category, Taxonomy};
pub use types::{Changelog, Document, NormalizedCommit};
