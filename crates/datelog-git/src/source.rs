//! [`CommitSource`] backed by a git repository

use datelog_core::{CommitInfo, CommitSource};

use crate::repository::GitRepo;

impl CommitSource for GitRepo {
    fn commits(&self) -> datelog_core::Result<Vec<CommitInfo>> {
        Ok(self.all_commits()?)
    }

    fn abbreviate(&self, hash: &str, width: usize) -> datelog_core::Result<String> {
        Ok(GitRepo::abbreviate(self, hash, width)?)
    }
}
