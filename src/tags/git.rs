//! `git tag --merged` via the system git binary

use crate::error::{Error, Result};
use crate::tags::TagSource;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Queries tags by running `git` in a repository directory
#[derive(Debug, Clone)]
pub struct GitCli {
    repo_path: PathBuf,
}

impl GitCli {
    /// Create a git tag source rooted at `repo_path`
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
        }
    }

    /// Repository directory the commands run in
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }
}

impl TagSource for GitCli {
    fn merged_tags(&self, reference: &str) -> Result<Vec<String>> {
        let command = format!("git tag --merged {reference}");
        debug!("running '{command}' in {}", self.repo_path.display());

        // Blocks until git exits; there is no timeout.
        let output = Command::new("git")
            .current_dir(&self.repo_path)
            .args(["tag", "--merged", reference])
            .output()
            .map_err(|e| Error::Git {
                command: command.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(Error::Git {
                command,
                message: if stderr.is_empty() {
                    output.status.to_string()
                } else {
                    stderr
                },
            });
        }

        Ok(parse_tag_list(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Split command output into tag names, dropping blank lines
pub fn parse_tag_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}
