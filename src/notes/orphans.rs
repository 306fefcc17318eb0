//! Orphan filter: tags without a published release

use crate::types::Release;
use std::collections::HashSet;

/// Split tags into those with a release and those without
///
/// Both halves keep the input order.
pub fn partition_orphans(tags: &[String], releases: &[Release]) -> (Vec<String>, Vec<String>) {
    let released: HashSet<&str> = releases.iter().map(|r| r.tag_name.as_str()).collect();
    tags.iter()
        .cloned()
        .partition(|tag| released.contains(tag.as_str()))
}
