//! Repository identity and metadata

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Which repository the current working directory belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoIdentity {
    /// Organization
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepoIdentity {
    /// Create a new identity
    #[must_use]
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Derive the identity from a `remote.origin.url` value
    ///
    /// Accepts SSH (`git@github.com:Owner/repo.git`) and HTTPS
    /// (`https://github.com/Owner/repo.git`) shapes. Returns `None` when the
    /// remote does not belong to `owner`.
    #[must_use]
    pub fn from_remote_url(url: &str, owner: &str) -> Option<Self> {
        let pattern = format!(r"github\.com[:/]{}/([^/\s]+?)(?:\.git)?/?$", regex::escape(owner));
        let re = Regex::new(&pattern).ok()?;
        re.captures(url.trim())
            .and_then(|c| c.get(1))
            .map(|m| Self::new(owner, m.as_str()))
    }

    /// `owner/name`
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl std::fmt::Display for RepoIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Repository metadata from the hosting platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name
    pub name: String,
    /// Configured default branch
    pub default_branch: String,
    /// HTTPS clone URL
    pub clone_url: String,
    /// SSH clone URL
    pub ssh_url: String,
}

/// One of the authenticated user's email addresses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEmail {
    /// Address
    pub email: String,
    /// Whether the platform verified it
    #[serde(default)]
    pub verified: bool,
    /// Whether it is the primary address
    #[serde(default)]
    pub primary: bool,
}

/// A published release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Release tag, e.g. `v1.2.3`
    pub tag_name: String,
}
