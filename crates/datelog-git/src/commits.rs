//! Commit history operations

use chrono::{DateTime, FixedOffset};
use git2::{ErrorCode, Oid, Sort};
use tracing::{debug, instrument};

use datelog_core::error::GitError;
use datelog_core::CommitInfo;

use crate::repository::{GitRepo, Result};

impl GitRepo {
    /// Get all commits reachable from HEAD, newest first
    ///
    /// A repository whose HEAD is unborn has no history and yields an empty
    /// list.
    #[instrument(skip(self), fields(path = %self.path().display()))]
    pub fn all_commits(&self) -> Result<Vec<CommitInfo>> {
        let Some(head) = self.head_commit()? else {
            return Ok(Vec::new());
        };

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push(head.id())?;

        let mut commits = Vec::new();

        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            commits.push(commit_to_info(&commit)?);
        }

        debug!(count = commits.len(), "walked commit history");
        Ok(commits)
    }

    /// Abbreviate a full hash to its shortest unique prefix of at least `width` characters
    ///
    /// Matches `git rev-parse --short=<width>`: the prefix grows one
    /// character at a time while it is ambiguous among all repository
    /// objects.
    pub fn abbreviate(&self, hash: &str, width: usize) -> Result<String> {
        let oid = Oid::from_str(hash)?;
        let full = oid.to_string();
        // libgit2 refuses prefixes shorter than four characters
        let mut len = width.clamp(4, full.len());

        loop {
            let prefix = &full[..len];
            match self.repo.find_object_by_prefix(prefix, None) {
                Ok(object) if object.id() == oid => return Ok(prefix.to_string()),
                Ok(_) => {
                    return Err(GitError::AbbreviationFailed {
                        hash: full,
                        reason: "prefix resolves to a different object".to_string(),
                    })
                }
                Err(e) if e.code() == ErrorCode::Ambiguous && len < full.len() => {
                    len += 1;
                }
                Err(e) if e.code() == ErrorCode::NotFound => {
                    return Err(GitError::AbbreviationFailed {
                        hash: full,
                        reason: "object not found".to_string(),
                    })
                }
                Err(e) => return Err(GitError::Git2(e)),
            }
        }
    }
}

/// Convert a git2 Commit to CommitInfo
fn commit_to_info(commit: &git2::Commit<'_>) -> Result<CommitInfo> {
    let hash = commit.id().to_string();
    let author = commit.author();
    let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();
    let timestamp = commit_timestamp(&hash, commit.time())?;

    Ok(CommitInfo::new(
        hash,
        message,
        String::from_utf8_lossy(author.name_bytes()),
        String::from_utf8_lossy(author.email_bytes()),
        timestamp,
    ))
}

/// Committer time in the committer's own offset
fn commit_timestamp(hash: &str, time: git2::Time) -> Result<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60);
    let utc = DateTime::from_timestamp(time.seconds(), 0);

    match (offset, utc) {
        (Some(offset), Some(utc)) => Ok(utc.with_timezone(&offset)),
        _ => Err(GitError::InvalidTimestamp {
            hash: hash.to_string(),
            seconds: time.seconds(),
            offset_minutes: time.offset_minutes(),
        }),
    }
}
