//! Tests for issue number validation

use matsuri::MatsuriError;
use matsuri::core::models::IssueState;
use matsuri::core::services::{IssueValidator, Session};

use crate::common::{self, closed_issue, issue, mocks::MockForge, pull};

fn forge() -> MockForge {
    MockForge::new()
        .with_issue(issue(1, "Poster"))
        .with_issue(closed_issue(2, "Old poster"))
        .with_issue(pull(3, "Poster PR"))
        .with_broken_issue(4)
}

#[test]
fn test_is_open_issue() {
    let forge = forge();
    let (settings, repo) = (common::settings(), common::repo());
    let validator = IssueValidator::new(common::session(&forge, &settings, &repo));

    assert!(validator.is_open_issue(1));
    assert!(!validator.is_open_issue(2));
    assert!(!validator.is_open_issue(3));
    assert!(!validator.is_open_issue(4));
    assert!(!validator.is_open_issue(99));
}

#[test]
fn test_is_known_issue() {
    let forge = forge();
    let (settings, repo) = (common::settings(), common::repo());
    let validator = IssueValidator::new(common::session(&forge, &settings, &repo));

    assert!(validator.is_known_issue(1));
    assert!(validator.is_known_issue(2));
    assert!(!validator.is_known_issue(3));
    assert!(!validator.is_known_issue(99));
}

#[test]
fn test_outside_repository_nothing_is_valid() {
    let forge = forge();
    let settings = common::settings();
    let validator = IssueValidator::new(Session::new(&forge, &settings, None));

    assert!(!validator.is_open_issue(1));
    assert!(!validator.is_known_issue(1));
}

#[test]
fn test_require_open_issue_rejections_are_validation() {
    let forge = forge();
    let (settings, repo) = (common::settings(), common::repo());
    let validator = IssueValidator::new(common::session(&forge, &settings, &repo));

    assert!(validator.require_open_issue(1).is_ok());
    for number in [2, 3, 99] {
        let err = validator.require_open_issue(number).unwrap_err();
        assert!(matches!(err, MatsuriError::Validation(_)), "#{number}: {err}");
        assert_eq!(err.exit_code(), 2);
    }
}

#[test]
fn test_require_known_issue() {
    let forge = forge();
    let (settings, repo) = (common::settings(), common::repo());
    let validator = IssueValidator::new(common::session(&forge, &settings, &repo));

    assert!(validator.require_known_issue(2).is_ok());
    assert!(matches!(validator.require_known_issue(3), Err(MatsuriError::Validation(ref m)) if m.contains("pull request")));
    assert!(matches!(validator.require_known_issue(99), Err(MatsuriError::Validation(_))));
}

#[test]
fn test_api_failure_is_not_a_validation_failure() {
    let forge = forge();
    let (settings, repo) = (common::settings(), common::repo());
    let validator = IssueValidator::new(common::session(&forge, &settings, &repo));

    let err = validator.require_open_issue(4).unwrap_err();
    assert!(matches!(err, MatsuriError::Api { status: 500, .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(matches!(validator.require_known_issue(4), Err(MatsuriError::Api { .. })));
}

#[test]
fn test_outside_repository_is_reported() {
    let forge = forge();
    let settings = common::settings();
    let validator = IssueValidator::new(Session::new(&forge, &settings, None));

    let err = validator.require_open_issue(1).unwrap_err();
    assert!(matches!(err, MatsuriError::NotInRepository { .. }));
}

#[test]
fn test_reopen_closed_issue() {
    let forge = forge();
    let (settings, repo) = (common::settings(), common::repo());
    let validator = IssueValidator::new(common::session(&forge, &settings, &repo));

    assert!(validator.reopen_issue(2).unwrap());
    assert_eq!(forge.state_edits(), vec![(2, IssueState::Open)]);
    assert!(validator.is_open_issue(2));
}

#[test]
fn test_reopen_skips_open_issues_and_pulls() {
    let forge = forge();
    let (settings, repo) = (common::settings(), common::repo());
    let validator = IssueValidator::new(common::session(&forge, &settings, &repo));

    assert!(!validator.reopen_issue(1).unwrap());
    assert!(!validator.reopen_issue(3).unwrap());
    assert!(validator.reopen_issue(99).is_err());
    assert!(forge.state_edits().is_empty());
}

#[test]
fn test_open_issues_excludes_closed_and_pulls() {
    let forge = forge().with_issue(issue(5, "Tickets"));
    let (settings, repo) = (common::settings(), common::repo());
    let validator = IssueValidator::new(common::session(&forge, &settings, &repo));

    let numbers: Vec<u64> = validator.open_issues().unwrap().iter().map(|i| i.number).collect();
    assert_eq!(numbers, vec![1, 5]);
}
