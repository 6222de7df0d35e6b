//! Wire types for the REST API
//!
//! Only the fields the workflow reads are declared; everything else in the
//! responses is ignored.

use serde::{Deserialize, Serialize};

use crate::core::models::{Issue, IssueState};

/// Issue as returned by `GET /repos/{owner}/{repo}/issues/{n}`
#[derive(Debug, Deserialize)]
pub struct IssueResponse {
    /// Number
    pub number: u64,
    /// Title
    pub title: String,
    /// State
    pub state: IssueState,
    /// Present only when the number denotes a pull request
    #[serde(default)]
    pub pull_request: Option<serde_json::Value>,
    /// API URL of the owning repository
    #[serde(default)]
    pub repository_url: Option<String>,
    /// Browser URL
    #[serde(default)]
    pub html_url: String,
}

impl IssueResponse {
    /// Convert to the domain model, naming the repository from
    /// `repository_url` when the API supplied it
    #[must_use]
    pub fn into_issue(self, fallback_repo: &str) -> Issue {
        let repository = self
            .repository_url
            .as_deref()
            .and_then(|u| u.trim_end_matches('/').rsplit('/').next())
            .filter(|s| !s.is_empty())
            .unwrap_or(fallback_repo)
            .to_string();
        Issue {
            number: self.number,
            title: self.title,
            state: self.state,
            is_pull_request: self.pull_request.is_some(),
            repository,
            html_url: self.html_url,
        }
    }
}

/// Body of `POST /projects/columns/cards/{id}/moves`
#[derive(Debug, Serialize)]
pub struct MoveCardRequest<'a> {
    /// `top`, `bottom` or `after:<card_id>`
    pub position: &'a str,
    /// Target column
    pub column_id: u64,
}

/// Body of `PATCH /repos/{owner}/{repo}/issues/{n}`
#[derive(Debug, Serialize)]
pub struct EditIssueRequest {
    /// New state
    pub state: IssueState,
}

/// Error body returned by the API
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub message: String,
}
