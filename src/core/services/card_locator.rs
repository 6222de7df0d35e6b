//! Card locator - what a card refers to
//!
//! Content URL pattern matching lives here and nowhere else. Pull request
//! cards can be addressed through the issues endpoint too, so a card
//! classified as an issue may still turn out to be a pull request once the
//! issue record is fetched.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::{Card, CardKind, ContentEndpoint, ContentRef, RepoIdentity};
use crate::error::{MatsuriError, Result};

static CONTENT_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/repos/([^/\s]+)/([^/\s]+)/(issues|pulls)/(\d+)/?$")
        .expect("content reference pattern is valid")
});

static ISSUE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/issues/(\d+)/?$").expect("issue number pattern is valid"));

/// Parse a content URL into owner, repository, endpoint and number
#[must_use]
pub fn parse_content_ref(url: &str) -> Option<ContentRef> {
    let caps = CONTENT_REF.captures(url.trim())?;
    let endpoint = match &caps[3] {
        "issues" => ContentEndpoint::Issues,
        _ => ContentEndpoint::Pulls,
    };
    Some(ContentRef {
        owner: caps[1].to_string(),
        repo: caps[2].to_string(),
        endpoint,
        number: caps[4].parse().ok()?,
    })
}

/// Issue number referenced by a card's `.../issues/<n>` content URL
pub fn issue_number_of(card: &Card) -> Result<u64> {
    let reference = card.content_url.as_deref().unwrap_or_default();
    ISSUE_NUMBER
        .captures(reference.trim())
        .and_then(|c| c[1].parse().ok())
        .ok_or_else(|| MatsuriError::Extraction {
            reference: reference.to_string(),
        })
}

/// Classify a card relative to the current repository
///
/// Items of other repositories (forks, renamed repos under the same
/// organization) and note cards are `Unrecognized`.
#[must_use]
pub fn classify(card: &Card, repo: &RepoIdentity) -> CardKind {
    let Some(content) = card.content_url.as_deref().and_then(parse_content_ref) else {
        return CardKind::Unrecognized;
    };
    if !content.owner.eq_ignore_ascii_case(&repo.owner)
        || !content.repo.eq_ignore_ascii_case(&repo.name)
    {
        return CardKind::Unrecognized;
    }
    match content.endpoint {
        ContentEndpoint::Issues => CardKind::Issue(content.number),
        ContentEndpoint::Pulls => CardKind::PullRequest(content.number),
    }
}

/// Whether the card addresses the current repository's issues endpoint
#[must_use]
pub fn is_issue_card(card: &Card, repo: &RepoIdentity) -> bool {
    matches!(classify(card, repo), CardKind::Issue(_))
}
