//! Git integration adapter
//!
//! Implements `VersionControl` by running the `git` executable. A non-zero
//! exit becomes `ExternalTool` carrying the command's output verbatim.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::core::ports::VersionControl;
use crate::error::{MatsuriError, Result};

/// Git-based version control implementation
#[derive(Debug, Clone)]
pub struct GitVersionControl {
    /// Working directory
    workdir: PathBuf,
}

impl GitVersionControl {
    /// Create a new git version control adapter
    #[must_use]
    pub const fn new(workdir: PathBuf) -> Self {
        Self { workdir }
    }

    /// Create a git adapter for the current directory
    pub fn current_dir() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    fn run_in(&self, dir: &Path, args: &[&str]) -> Result<String> {
        let command = format!("git {}", args.join(" "));
        log::debug!("running {command}");
        let output = Command::new("git").args(args).current_dir(dir).output()?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MatsuriError::ExternalTool {
                command,
                output: format!("{stdout}{stderr}").trim_end().to_string(),
            });
        }
        Ok(stdout)
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        self.run_in(&self.workdir, args)
    }
}

impl VersionControl for GitVersionControl {
    fn status(&self) -> Result<String> {
        self.run(&["status"])
    }

    fn checkout(&self, branch: &str) -> Result<String> {
        self.run(&["checkout", branch])
    }

    fn checkout_new(&self, branch: &str) -> Result<String> {
        self.run(&["checkout", "-b", branch])
    }

    fn pull(&self) -> Result<String> {
        self.run(&["pull"])
    }

    fn push_upstream(&self, refspec: &str) -> Result<String> {
        self.run(&["push", "-u", "origin", refspec])
    }

    fn clone_repo(&self, url: &str) -> Result<String> {
        self.run(&["clone", url])
    }

    fn remote_origin_url(&self) -> Option<String> {
        self.run(&["config", "--get", "remote.origin.url"])
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn set_local_email(&self, dir: &Path, email: &str) -> Result<()> {
        let dir = if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            self.workdir.join(dir)
        };
        self.run_in(&dir, &["config", "--local", "user.email", email]).map(|_| ())
    }
}

