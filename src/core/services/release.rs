//! Release version comparison and organization email lookup

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::{RepoIdentity, UserEmail};
use crate::error::{MatsuriError, Result};

use super::Session;

static RELEASE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v?(\d+)\.(\d+)\.(\d+)$").expect("release tag pattern is valid")
});

/// A `major.minor.patch` version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    /// Major
    pub major: u64,
    /// Minor
    pub minor: u64,
    /// Patch
    pub patch: u64,
}

impl Version {
    /// Parse `1.2.3` or `v1.2.3`
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let caps = RELEASE_TAG.captures(s.trim())?;
        Some(Self {
            major: caps[1].parse().ok()?,
            minor: caps[2].parse().ok()?,
            patch: caps[3].parse().ok()?,
        })
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Latest released version of this tool
pub fn latest_release_version(session: Session<'_>) -> Result<Version> {
    let forge_settings = &session.settings().forge;
    let repo = RepoIdentity::new(forge_settings.owner.as_str(), forge_settings.tool_repo.as_str());
    let release = session.forge().latest_release(&repo)?;
    Version::parse(&release.tag_name).ok_or_else(|| MatsuriError::Extraction {
        reference: release.tag_name,
    })
}

/// First verified address on the organization's email domain
#[must_use]
pub fn find_org_email(emails: &[UserEmail], domain: &str) -> Option<String> {
    let pattern = format!(r"^[\w._+-]+@{}$", regex::escape(domain));
    let re = Regex::new(&pattern).ok()?;
    emails
        .iter()
        .find(|e| e.verified && re.is_match(&e.email))
        .map(|e| e.email.clone())
}
