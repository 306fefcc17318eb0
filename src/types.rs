//! Core types for tag-notes

use serde::{Deserialize, Serialize};
use std::fmt;

/// A GitHub repository coordinate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A published release as returned by the releases API
///
/// Only the fields this tool reads are deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Tag the release is attached to
    pub tag_name: String,
    /// Human title
    #[serde(default)]
    pub name: Option<String>,
    /// Markdown notes
    #[serde(default)]
    pub body: Option<String>,
}

/// Release notes for one tag, ready to print
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseNote {
    /// The tag that was looked up
    pub tag: String,
    /// Display name of the release
    pub name: String,
    /// Notes body
    pub body: String,
}

impl ReleaseNote {
    /// Build a note from a fetched release
    ///
    /// An unnamed release is displayed under its tag.
    pub fn from_release(tag: &str, release: Release) -> Self {
        let name = release
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| tag.to_string());

        Self {
            tag: tag.to_string(),
            name,
            body: release.body.unwrap_or_default(),
        }
    }
}
