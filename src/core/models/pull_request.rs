//! Pull request models

use serde::{Deserialize, Serialize};

/// A pull request to be submitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPullRequest {
    /// Title
    pub title: String,
    /// Head branch
    pub head: String,
    /// Base branch
    pub base: String,
    /// Body
    pub body: String,
}

/// A pull request created on the hosting platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// Platform identifier, used as card content
    pub id: u64,
    /// Number in the shared issue space
    pub number: u64,
    /// Browser URL
    pub html_url: String,
}
