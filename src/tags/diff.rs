//! Tag-set difference

use std::collections::HashSet;

/// Tags merged into the target but not into the source
///
/// Order follows `target`; a tag listed twice in `target` is kept once.
pub fn exclusive_tags(source: &[String], target: &[String]) -> Vec<String> {
    let excluded: HashSet<&str> = source.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();

    target
        .iter()
        .filter(|tag| !excluded.contains(tag.as_str()))
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}
