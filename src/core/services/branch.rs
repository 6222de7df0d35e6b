//! Topic branch preparation and publishing

use crate::core::ports::VersionControl;
use crate::error::{MatsuriError, Result};

use super::issue_branch;

/// Marker `git status` prints for a clean working tree
const CLEAN_TREE_MARKER: &str = "nothing to commit";

/// Whether `git status` output describes a clean working tree
#[must_use]
pub fn is_clean_status(status: &str) -> bool {
    status.contains(CLEAN_TREE_MARKER)
}

/// Get onto an up-to-date default branch before branching off it
///
/// Refuses to touch a working tree with uncommitted changes. Returns the
/// collected git output.
pub fn prepare_checkout(vcs: &dyn VersionControl, default_branch: &str) -> Result<Vec<String>> {
    let mut output = Vec::new();

    let status = vcs.status()?;
    if !is_clean_status(&status) {
        return Err(MatsuriError::validation(
            "there might be unsaved changes in the current repository.\n\
             Resolve them before creating a new branch",
        ));
    }
    output.push(status);
    output.push(vcs.checkout(default_branch)?);
    output.push(vcs.pull()?);
    Ok(output)
}

/// Create and switch to the topic branch for an issue
pub fn start_topic_branch(vcs: &dyn VersionControl, issue: u64) -> Result<String> {
    vcs.checkout_new(&issue_branch(issue))
}

/// Push the topic branch for an issue to origin, setting upstream
pub fn save_topic_branch(vcs: &dyn VersionControl, issue: u64) -> Result<String> {
    let branch = issue_branch(issue);
    vcs.push_upstream(&format!("{branch}:{branch}"))
}
