//! Test data factories for tag-notes types
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use std::collections::HashMap;
use tag_notes::error::{Error, Result};
use tag_notes::tags::TagSource;
use tag_notes::types::{Release, Repository};

/// Create a release whose name equals its tag
pub fn make_release(tag: &str, body: &str) -> Release {
    make_named_release(tag, tag, body)
}

/// Create a release with a distinct display name
pub fn make_named_release(tag: &str, name: &str, body: &str) -> Release {
    Release {
        tag_name: tag.to_string(),
        name: Some(name.to_string()),
        body: Some(body.to_string()),
    }
}

/// Repository used throughout the tests
pub fn make_repository() -> Repository {
    Repository {
        owner: "acme".to_string(),
        name: "widgets".to_string(),
    }
}

/// Convert string slices into owned tag names
pub fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

/// Tag source answering from a fixed table
///
/// References missing from the table fail like an unknown git reference.
#[derive(Default)]
pub struct StaticTags {
    merged: HashMap<String, Vec<String>>,
}

impl StaticTags {
    /// Register the tags merged into `reference`
    #[must_use]
    pub fn with(mut self, reference: &str, merged: &[&str]) -> Self {
        self.merged.insert(reference.to_string(), tags(merged));
        self
    }
}

impl TagSource for StaticTags {
    fn merged_tags(&self, reference: &str) -> Result<Vec<String>> {
        self.merged
            .get(reference)
            .cloned()
            .ok_or_else(|| Error::Git {
                command: format!("git tag --merged {reference}"),
                message: format!("malformed object name {reference}"),
            })
    }
}

/// Run git in `dir` with a fixed identity, returning whether it succeeded
pub fn git(dir: &std::path::Path, args: &[&str]) -> bool {
    std::process::Command::new("git")
        .current_dir(dir)
        .args(["-c", "user.name=Test", "-c", "user.email=test@example.com"])
        .args(["-c", "commit.gpgsign=false", "-c", "tag.gpgsign=false"])
        .args(args)
        .output()
        .is_ok_and(|o| o.status.success())
}

/// Create a repository with one commit per tag, tagged in order
///
/// Returns `None` when git is not available.
pub fn init_tagged_repo(tag_names: &[&str]) -> Option<tempfile::TempDir> {
    let dir = tempfile::TempDir::new().ok()?;
    if !git(dir.path(), &["init", "-q"]) {
        return None;
    }
    for tag in tag_names {
        let message = format!("release {tag}");
        if !git(dir.path(), &["commit", "-q", "--allow-empty", "-m", &message])
            || !git(dir.path(), &["tag", tag])
        {
            return None;
        }
    }
    Some(dir)
}
