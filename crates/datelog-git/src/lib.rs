//! Datelog Git - Repository access for changelog generation
//!
//! This crate opens git work trees, walks commit history and resolves
//! abbreviated hashes. [`GitRepo`] implements
//! [`datelog_core::CommitSource`] so the changelog pipeline never touches
//! git2 directly.

mod commits;
mod repository;
mod source;

pub use repository::{GitRepo, Result};
