//! Issue model
//!
//! Issues and pull requests share one numbering space per repository. The
//! hosting platform owns them; nothing here is cached across invocations.

use serde::{Deserialize, Serialize};

/// Issue state on the hosting platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    /// Open
    #[default]
    Open,
    /// Closed
    Closed,
}

/// An issue, or a pull request seen through the issues endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Number, unique per repository
    pub number: u64,

    /// Title
    pub title: String,

    /// Open or closed
    pub state: IssueState,

    /// Whether this number actually denotes a pull request
    #[serde(default)]
    pub is_pull_request: bool,

    /// Name of the repository the issue lives in
    pub repository: String,

    /// Browser URL
    #[serde(default)]
    pub html_url: String,
}

impl Issue {
    /// Whether this is an open issue (not a pull request)
    #[must_use]
    pub fn is_open_issue(&self) -> bool {
        self.state == IssueState::Open && !self.is_pull_request
    }
}
