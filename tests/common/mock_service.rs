//! Mock release service for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tag_notes::error::{Error, Result};
use tag_notes::platform::ReleaseService;
use tag_notes::types::{Release, Repository};

use super::fixtures::make_repository;

/// In-memory release service
///
/// Features:
/// - Releases served from a list, looked up by tag
/// - Call tracking for verification
/// - Error injection for failure path testing
/// - Per-tag delays to shuffle completion order
pub struct MockReleaseService {
    repository: Repository,
    releases: Vec<Release>,
    // Call tracking
    list_calls: AtomicUsize,
    fetch_calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    // Error injection
    fail_list: Mutex<Option<String>>,
    fail_fetch: Mutex<HashSet<String>>,
    delays: Mutex<HashMap<String, Duration>>,
}

impl MockReleaseService {
    /// Create a mock serving the given releases
    pub fn new(releases: Vec<Release>) -> Self {
        Self {
            repository: make_repository(),
            releases,
            list_calls: AtomicUsize::new(0),
            fetch_calls: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            fail_list: Mutex::new(None),
            fail_fetch: Mutex::new(HashSet::new()),
            delays: Mutex::new(HashMap::new()),
        }
    }

    // === Error injection methods ===

    /// Make `list_releases` return an error
    pub fn fail_list(&self, msg: &str) {
        *self.fail_list.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `release_by_tag` fail for `tag`
    pub fn fail_fetch(&self, tag: &str) {
        self.fail_fetch.lock().unwrap().insert(tag.to_string());
    }

    /// Delay the response for `tag`
    pub fn delay(&self, tag: &str, delay: Duration) {
        self.delays.lock().unwrap().insert(tag.to_string(), delay);
    }

    // === Call verification methods ===

    /// Number of `list_releases` calls
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Tags passed to `release_by_tag`, in call order
    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.lock().unwrap().clone()
    }

    /// Highest number of concurrent `release_by_tag` calls observed
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReleaseService for MockReleaseService {
    async fn list_releases(&self) -> Result<Vec<Release>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(msg) = self.fail_list.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        Ok(self.releases.clone())
    }

    async fn release_by_tag(&self, tag: &str) -> Result<Release> {
        self.fetch_calls.lock().unwrap().push(tag.to_string());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let delay = self.delays.lock().unwrap().get(tag).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        } else {
            tokio::task::yield_now().await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.fail_fetch.lock().unwrap().contains(tag) {
            return Err(Error::GitHubApi(format!("injected failure for {tag}")));
        }

        self.releases
            .iter()
            .find(|r| r.tag_name == tag)
            .cloned()
            .ok_or_else(|| Error::ReleaseNotFound(tag.to_string()))
    }

    fn repository(&self) -> &Repository {
        &self.repository
    }
}
