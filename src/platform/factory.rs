//! Release service factory

use crate::config::Config;
use crate::error::Result;
use crate::platform::{GitHubReleases, ReleaseService};

/// Create a release service from configuration
pub fn create_release_service(config: &Config) -> Result<Box<dyn ReleaseService>> {
    Ok(Box::new(GitHubReleases::new(
        config.token.clone(),
        config.repository.clone(),
        &config.api_url,
    )?))
}
