//! GitHub releases API client

use crate::error::{Error, Result};
use crate::platform::ReleaseService;
use crate::types::{Release, Repository};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// GitHub releases service using reqwest
pub struct GitHubReleases {
    client: Client,
    token: String,
    api_url: String,
    repository: Repository,
}

impl GitHubReleases {
    /// Create a new GitHub releases client
    ///
    /// `api_url` is the API root, e.g. `https://api.github.com` or
    /// `https://ghe.example.com/api/v3`.
    pub fn new(token: String, repository: Repository, api_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            token,
            api_url: api_url.trim_end_matches('/').to_string(),
            repository,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}{}",
            self.api_url, self.repository.owner, self.repository.name, path
        )
    }
}

#[async_trait]
impl ReleaseService for GitHubReleases {
    async fn list_releases(&self) -> Result<Vec<Release>> {
        let url = self.api_url("/releases");

        let releases: Vec<Release> = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::GitHubApi(e.to_string()))?
            .json()
            .await?;

        Ok(releases)
    }

    async fn release_by_tag(&self, tag: &str) -> Result<Release> {
        let url = self.api_url(&format!("/releases/tags/{}", urlencoding::encode(tag)));

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::ReleaseNotFound(tag.to_string()));
        }

        let release = response
            .error_for_status()
            .map_err(|e| Error::GitHubApi(e.to_string()))?
            .json()
            .await?;

        Ok(release)
    }

    fn repository(&self) -> &Repository {
        &self.repository
    }
}
