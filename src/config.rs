//! Configuration resolved from the environment
//!
//! This is the only module that reads process environment variables. The
//! rest of the crate receives a [`Config`] by reference.

use crate::error::{Error, Result};
use crate::types::Repository;
use std::env;
use std::fmt;
use tracing::info;

/// Variable naming the variable that holds the token
pub const TOKEN_VAR_NAME_KEY: &str = "GITHUB_TOKEN_VAR_NAME";
/// Token variable used when `GITHUB_TOKEN_VAR_NAME` is unset
pub const DEFAULT_TOKEN_VAR: &str = "GITHUB_TOKEN";
/// Repository owner variable
pub const REPO_OWNER_KEY: &str = "GITHUB_REPO_OWNER";
/// Repository name variable
pub const REPO_NAME_KEY: &str = "GITHUB_REPO_NAME";
/// Optional API base URL override
pub const API_URL_KEY: &str = "GITHUB_API_URL";
/// API base URL used when `GITHUB_API_URL` is unset
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Immutable run configuration
#[derive(Clone)]
pub struct Config {
    /// API token
    pub token: String,
    /// Name of the variable the token was read from
    pub token_var: String,
    /// Repository whose releases are queried
    pub repository: Repository,
    /// API base URL without trailing slash
    pub api_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &format_args!("<{} chars>", self.token.len()))
            .field("token_var", &self.token_var)
            .field("repository", &self.repository)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl Config {
    /// Resolve configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary key lookup
    ///
    /// Empty values are treated as unset. Fails on the first missing
    /// required key, checking the token, then the owner, then the name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let token_var = get(TOKEN_VAR_NAME_KEY).unwrap_or_else(|| {
            info!("{TOKEN_VAR_NAME_KEY} is not defined, using the default: {DEFAULT_TOKEN_VAR}");
            DEFAULT_TOKEN_VAR.to_string()
        });

        let token = get(&token_var).ok_or_else(|| Error::MissingEnv {
            var: token_var.clone(),
            hint: "The GitHub token is not defined in the environment or .env file.".into(),
        })?;

        let owner = get(REPO_OWNER_KEY).ok_or_else(|| Error::MissingEnv {
            var: REPO_OWNER_KEY.into(),
            hint: "Set it in the environment or the .env file.".into(),
        })?;

        let name = get(REPO_NAME_KEY).ok_or_else(|| Error::MissingEnv {
            var: REPO_NAME_KEY.into(),
            hint: "Set it in the environment or the .env file.".into(),
        })?;

        let api_url = get(API_URL_KEY)
            .map_or_else(|| DEFAULT_API_URL.to_string(), |u| u.trim_end_matches('/').to_string());

        Ok(Self {
            token,
            token_var,
            repository: Repository { owner, name },
            api_url,
        })
    }

    /// Log the resolved values; the token is reported by length only
    pub fn log_summary(&self) {
        info!("{} is {} characters in length.", self.token_var, self.token.len());
        info!("{REPO_OWNER_KEY} is {}.", self.repository.owner);
        info!("{REPO_NAME_KEY} is {}.", self.repository.name);
    }
}
