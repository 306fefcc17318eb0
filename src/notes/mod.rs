//! Release notes pipeline
//!
//! Runs the whole lookup for one source/target pair:
//! 1. Exclusive tags - tags merged into the target but not the source
//! 2. Orphan filter - drop tags with no published release
//! 3. Fetch - look up notes for the remaining tags, in order
//!
//! Every step degrades instead of aborting. Each degradation is logged and
//! recorded as a [`SoftFailure`] on the returned [`ReleaseReport`].

mod fetch;
mod format;
mod orphans;

pub use fetch::{DEFAULT_CONCURRENCY, fetch_release_notes};
pub use format::write_notes;
pub use orphans::partition_orphans;

use crate::error::Error;
use crate::platform::ReleaseService;
use crate::tags::{TagSource, exclusive_tags};
use crate::types::ReleaseNote;
use std::fmt;
use tracing::{debug, error, warn};

/// A step that failed and was replaced by an empty result
#[derive(Debug)]
pub enum SoftFailure {
    /// `git tag --merged` failed; the reference was treated as having no tags
    TagQuery {
        /// Reference that was queried
        reference: String,
        /// Underlying error
        error: Error,
    },
    /// Listing releases failed; every exclusive tag was treated as orphaned
    ReleaseList {
        /// Underlying error
        error: Error,
    },
    /// Fetching one tag's release failed; the tag was left out of the output
    ReleaseFetch {
        /// Tag that was looked up
        tag: String,
        /// Underlying error
        error: Error,
    },
}

impl fmt::Display for SoftFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TagQuery { reference, error } => {
                write!(f, "listing tags merged into {reference} failed: {error}")
            }
            Self::ReleaseList { error } => write!(f, "listing releases failed: {error}"),
            Self::ReleaseFetch { tag, error } => {
                write!(f, "fetching release notes for tag {tag} failed: {error}")
            }
        }
    }
}

/// Outcome of one pipeline run
#[derive(Debug, Default)]
pub struct ReleaseReport {
    /// Tags merged into the target but not the source, in target order
    pub exclusive: Vec<String>,
    /// Exclusive tags without a published release
    pub orphaned: Vec<String>,
    /// Fetched notes, in exclusive-tag order
    pub notes: Vec<ReleaseNote>,
    /// Steps that degraded to an empty result
    pub failures: Vec<SoftFailure>,
}

impl ReleaseReport {
    /// Whether any step fell back to an empty result
    pub fn is_degraded(&self) -> bool {
        !self.failures.is_empty()
    }

    fn record(&mut self, failure: SoftFailure) {
        error!("{failure}");
        self.failures.push(failure);
    }
}

/// Collect release notes for tags exclusive to `target`
pub async fn collect_release_notes(
    tags: &dyn TagSource,
    service: &dyn ReleaseService,
    source: &str,
    target: &str,
    concurrency: usize,
) -> ReleaseReport {
    let mut report = ReleaseReport::default();
    debug!("source tag: {source}");
    debug!("target tag: {target}");

    let target_merged = merged_or_empty(tags, target, &mut report);
    let source_merged = merged_or_empty(tags, source, &mut report);
    report.exclusive = exclusive_tags(&source_merged, &target_merged);
    debug!("exclusive tags: {:?}", report.exclusive);

    if report.exclusive.is_empty() {
        return report;
    }

    let releases = match service.list_releases().await {
        Ok(releases) => releases,
        Err(error) => {
            report.record(SoftFailure::ReleaseList { error });
            Vec::new()
        }
    };
    debug!(
        "release tags in {}: {:?}",
        service.repository(),
        releases.iter().map(|r| r.tag_name.as_str()).collect::<Vec<_>>()
    );

    let (published, orphaned) = partition_orphans(&report.exclusive, &releases);
    if !orphaned.is_empty() {
        warn!("these tags were not associated with any releases, and will be skipped: {orphaned:?}");
    }
    report.orphaned = orphaned;

    for (tag, result) in fetch_release_notes(service, &published, concurrency).await {
        match result {
            Ok(note) => report.notes.push(note),
            Err(error) => report.record(SoftFailure::ReleaseFetch { tag, error }),
        }
    }

    report
}

fn merged_or_empty(tags: &dyn TagSource, reference: &str, report: &mut ReleaseReport) -> Vec<String> {
    tags.merged_tags(reference).unwrap_or_else(|error| {
        report.record(SoftFailure::TagQuery {
            reference: reference.to_string(),
            error,
        });
        Vec::new()
    })
}
