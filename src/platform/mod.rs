//! Release hosting services
//!
//! Abstracts the releases API so the notes pipeline can run against GitHub
//! or a test double.

mod factory;
mod github;

pub use factory::create_release_service;
pub use github::GitHubReleases;

use crate::error::Result;
use crate::types::{Release, Repository};
use async_trait::async_trait;

/// Read-only access to a repository's published releases
#[async_trait]
pub trait ReleaseService: Send + Sync {
    /// List releases (first page only)
    async fn list_releases(&self) -> Result<Vec<Release>>;

    /// Get the release attached to a tag
    async fn release_by_tag(&self, tag: &str) -> Result<Release>;

    /// Repository this service reads from
    fn repository(&self) -> &Repository;
}
