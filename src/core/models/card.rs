//! Card model
//!
//! A card references exactly one issue or pull request through its content
//! URL. The platform guarantees a card sits in at most one column.

use serde::{Deserialize, Serialize};

/// A board entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Platform-assigned identifier
    pub id: u64,
    /// API URL of the referenced issue or pull request (absent for notes)
    #[serde(default)]
    pub content_url: Option<String>,
}

/// What a card refers to, relative to one repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    /// An issue of the repository
    Issue(u64),
    /// A pull request of the repository
    PullRequest(u64),
    /// A note, another repository's item, or an unknown shape
    Unrecognized,
}

/// Which API endpoint a content URL points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentEndpoint {
    /// `.../issues/<n>`
    Issues,
    /// `.../pulls/<n>`
    Pulls,
}

/// A parsed content URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentRef {
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Endpoint the URL addresses
    pub endpoint: ContentEndpoint,
    /// Issue or pull request number
    pub number: u64,
}

/// Content of a card to be created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewCard {
    /// Platform identifier of the referenced item
    pub content_id: u64,
    /// Kind of the referenced item
    pub content_type: NewCardContent,
}

/// Kind of item a new card references
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NewCardContent {
    /// An issue
    Issue,
    /// A pull request
    PullRequest,
}

impl NewCard {
    /// Card content for a freshly created pull request
    #[must_use]
    pub const fn pull_request(id: u64) -> Self {
        Self {
            content_id: id,
            content_type: NewCardContent::PullRequest,
        }
    }
}
