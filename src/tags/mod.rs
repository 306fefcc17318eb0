//! Tag queries against the local git repository
//!
//! Lists the tags merged into a reference and computes which tags are
//! exclusive to a target reference.

mod diff;
mod git;

pub use diff::exclusive_tags;
pub use git::{GitCli, parse_tag_list};

use crate::error::Result;

/// Source of "tags merged into reference" listings
///
/// Implemented by [`GitCli`] for real repositories and by test doubles.
pub trait TagSource: Send + Sync {
    /// List tags whose commits are reachable from `reference`
    fn merged_tags(&self, reference: &str) -> Result<Vec<String>>;
}
