//! Date then category grouping
//!
//! Dates keep the order in which they were first seen while scanning;
//! categories inside a date are stored by id and only ordered at render time.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::NormalizedCommit;

/// Commits of a single day, bucketed by category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateGroup {
    /// Commit day
    pub date: NaiveDate,
    /// Commits per category id, each in scan order
    pub categories: BTreeMap<String, Vec<NormalizedCommit>>,
}

impl DateGroup {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            categories: BTreeMap::new(),
        }
    }

    /// Commits recorded for a category, in scan order
    pub fn commits(&self, category: &str) -> Option<&[NormalizedCommit]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Category ids present on this day
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Number of commits on this day
    pub fn commit_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

/// Commits grouped by date, then by category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupedChangelog {
    dates: Vec<DateGroup>,
    #[serde(skip)]
    index: HashMap<NaiveDate, usize>,
}

impl GroupedChangelog {
    /// Create an empty grouping
    pub fn new() -> Self {
        Self::default()
    }

    /// Group commits in the order given
    pub fn from_commits(commits: impl IntoIterator<Item = NormalizedCommit>) -> Self {
        let mut grouped = Self::new();
        for commit in commits {
            grouped.push(commit);
        }
        grouped
    }

    /// Add a commit, creating its date and category buckets on first sight
    pub fn push(&mut self, commit: NormalizedCommit) {
        let position = match self.index.get(&commit.date) {
            Some(&position) => position,
            None => {
                self.dates.push(DateGroup::new(commit.date));
                self.index.insert(commit.date, self.dates.len() - 1);
                self.dates.len() - 1
            }
        };

        self.dates[position]
            .categories
            .entry(commit.category.clone())
            .or_default()
            .push(commit);
    }

    /// Date groups in first-seen order
    pub fn dates(&self) -> &[DateGroup] {
        &self.dates
    }

    /// Look up the group for a date
    pub fn get(&self, date: NaiveDate) -> Option<&DateGroup> {
        self.index.get(&date).map(|&position| &self.dates[position])
    }

    /// Number of distinct dates
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Check if no commit was grouped
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Total number of grouped commits
    pub fn commit_count(&self) -> usize {
        self.dates.iter().map(DateGroup::commit_count).sum()
    }
}

impl FromIterator<NormalizedCommit> for GroupedChangelog {
    fn from_iter<I: IntoIterator<Item = NormalizedCommit>>(iter: I) -> Self {
        Self::from_commits(iter)
    }
}
