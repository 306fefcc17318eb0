//! tag-notes - release notes between two git tags
//!
//! Finds the tags merged into a target reference but not into a source
//! reference, drops the ones without a published GitHub release, and fetches
//! the release notes for the rest.

pub mod config;
pub mod error;
pub mod notes;
pub mod platform;
pub mod tags;
pub mod types;
