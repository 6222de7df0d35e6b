//! Version control system port
//!
//! Defines the interface for the local git operations the workflow drives.
//! Failures carry the command's output verbatim.

use std::path::Path;

use crate::error::Result;

/// Version control system abstraction
pub trait VersionControl {
    /// Output of `git status`
    fn status(&self) -> Result<String>;

    /// Switch to an existing branch
    fn checkout(&self, branch: &str) -> Result<String>;

    /// Create a branch and switch to it
    fn checkout_new(&self, branch: &str) -> Result<String>;

    /// Pull the current branch
    fn pull(&self) -> Result<String>;

    /// Push a refspec to origin and set upstream
    fn push_upstream(&self, refspec: &str) -> Result<String>;

    /// Clone a repository into the working directory
    fn clone_repo(&self, url: &str) -> Result<String>;

    /// Value of `remote.origin.url`, if any
    fn remote_origin_url(&self) -> Option<String>;

    /// Set `user.email` in the local config of the repository at `dir`
    fn set_local_email(&self, dir: &Path, email: &str) -> Result<()>;
}
