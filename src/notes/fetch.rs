//! Concurrent release-note lookups

use crate::error::Result;
use crate::platform::ReleaseService;
use crate::types::ReleaseNote;
use futures::stream::{self, StreamExt};
use tracing::debug;

/// Default cap on in-flight release lookups
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Fetch release notes for each tag with at most `concurrency` requests in
/// flight
///
/// Results are returned in the order of `tags`, paired with their tag,
/// regardless of which request finishes first.
pub async fn fetch_release_notes(
    service: &dyn ReleaseService,
    tags: &[String],
    concurrency: usize,
) -> Vec<(String, Result<ReleaseNote>)> {
    stream::iter(tags)
        .map(|tag| async move {
            debug!("fetching release for {tag}");
            let note = service
                .release_by_tag(tag)
                .await
                .map(|release| ReleaseNote::from_release(tag, release));
            (tag.clone(), note)
        })
        .buffered(concurrency.max(1))
        .collect()
        .await
}
