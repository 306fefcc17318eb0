//! Error types for tag-notes

use thiserror::Error;

/// Errors produced while resolving configuration, querying git, or talking
/// to the releases API
#[derive(Debug, Error)]
pub enum Error {
    /// A required environment variable is unset or empty
    #[error("{var} must be defined. {hint}")]
    MissingEnv {
        /// Name of the missing variable
        var: String,
        /// How to fix it
        hint: String,
    },

    /// A git command exited unsuccessfully
    #[error("error executing command '{command}': {message}")]
    Git {
        /// The command line that was run
        command: String,
        /// stderr of the command, or the exit status
        message: String,
    },

    /// Spawning a subprocess or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with an unexpected status
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// No release exists for the tag
    #[error("no release found for tag {0}")]
    ReleaseNotFound(String),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
