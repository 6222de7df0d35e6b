//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use matsuri::core::models::{Card, CardKind, RepoIdentity};
use matsuri::core::services::card_locator::{classify, issue_number_of};
use matsuri::core::services::cycle::cycle_year;
use matsuri::core::services::{PrTemplate, compose};
use matsuri::core::services::release::Version;
use test_case::test_case;

use crate::common::{date, issue};

// =============================================================================
// Card Classification
// =============================================================================

fn card(url: &str) -> Card {
    Card {
        id: 1,
        content_url: Some(url.to_string()),
    }
}

#[test_case("https://api.github.com/repos/MatsuriJapon/website/issues/12", CardKind::Issue(12) ; "issue")]
#[test_case("https://api.github.com/repos/MatsuriJapon/website/pulls/3", CardKind::PullRequest(3) ; "pull request")]
#[test_case("https://api.github.com/repos/matsurijapon/Website/issues/12", CardKind::Issue(12) ; "case insensitive repo")]
#[test_case("https://api.github.com/repos/MatsuriJapon/api/issues/12", CardKind::Unrecognized ; "other repository")]
#[test_case("https://api.github.com/repos/Elsewhere/website/issues/12", CardKind::Unrecognized ; "other owner")]
#[test_case("https://api.github.com/repos/MatsuriJapon/website/issues/12/comments", CardKind::Unrecognized ; "sub resource")]
#[test_case("https://example.com/not-a-card", CardKind::Unrecognized ; "foreign url")]
fn test_classify(url: &str, expected: CardKind) {
    let repo = RepoIdentity::new("MatsuriJapon", "website");
    assert_eq!(classify(&card(url), &repo), expected);
}

#[test_case("https://api.github.com/repos/o/r/issues/42", Some(42) ; "plain")]
#[test_case("https://api.github.com/repos/o/r/issues/42/", Some(42) ; "trailing slash")]
#[test_case("https://api.github.com/repos/o/r/pulls/42", None ; "pull request url")]
#[test_case("https://api.github.com/repos/o/r/issues/abc", None ; "non numeric")]
fn test_issue_number_of(url: &str, expected: Option<u64>) {
    assert_eq!(issue_number_of(&card(url)).ok(), expected);
}

// =============================================================================
// Cycle Year
// =============================================================================

#[test_case("v2024", 2023, 11 => 2024 ; "branch year wins")]
#[test_case("v2025-staging", 2024, 1 => 2025 ; "branch year prefix")]
#[test_case("main", 2024, 1 => 2024 ; "before cutoff")]
#[test_case("main", 2024, 2 => 2024 ; "cutoff month itself")]
#[test_case("main", 2024, 3 => 2025 ; "after cutoff")]
#[test_case("develop", 2024, 12 => 2025 ; "december")]
fn test_cycle_year(branch: &str, year: i32, month: u32) -> i32 {
    cycle_year(branch, date(year, month, 1), 2)
}

// =============================================================================
// Pull Request Bodies
// =============================================================================

#[test_case(PrTemplate::Standard, false, "Closes #9" ; "standard closes")]
#[test_case(PrTemplate::Standard, true, "Related to #9" ; "standard no close")]
#[test_case(PrTemplate::Fix, false, "Closes #9" ; "fix closes")]
#[test_case(PrTemplate::Fix, true, "Fixes PR for #9" ; "fix no close")]
fn test_pr_body_mentions_issue(template: PrTemplate, no_close: bool, expected: &str) {
    let pr = compose(&issue(9, "Map"), "main", template, no_close);
    assert!(pr.body.contains(expected));
    assert_eq!(pr.body.contains("Closes"), !no_close);
}

// =============================================================================
// Versions
// =============================================================================

#[test_case("v1.2.3", "1.2.4" ; "patch")]
#[test_case("0.9.9", "v0.10.0" ; "minor numeric not lexical")]
#[test_case("1.9.0", "2.0.0" ; "major")]
fn test_version_ordering(older: &str, newer: &str) {
    assert!(Version::parse(older).unwrap() < Version::parse(newer).unwrap());
}
