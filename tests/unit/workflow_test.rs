//! Tests for the "to do" to "in progress" transition

use matsuri::MatsuriError;
use matsuri::core::services::{MoveOutcome, WorkflowEngine, WorkflowState};

use crate::common::{self, board_2024, card_for, issue, issue_card, mocks::MockForge};

// =============================================================================
// MOVE TESTS
// =============================================================================

#[test]
fn test_moves_card_from_todo() {
    let forge = board_2024().with_issue(issue(7, "Lantern layout")).with_card(10, issue_card(100, 7));
    let (settings, repo) = (common::settings(), common::repo());
    let engine = WorkflowEngine::new(common::session(&forge, &settings, &repo));

    let outcome = engine.move_to_in_progress(7, 2024).unwrap();

    assert!(matches!(outcome, MoveOutcome::Moved { ref board, ref card } if board == "Matsuri 2024" && card.id == 100));
    assert!(forge.cards_in(10).is_empty());
    assert_eq!(forge.cards_in(11), vec![100]);
}

#[test]
fn test_moved_card_lands_on_top() {
    let forge = board_2024()
        .with_issue(issue(7, "Lantern layout"))
        .with_issue(issue(8, "Stage schedule"))
        .with_card(10, issue_card(100, 7))
        .with_card(11, issue_card(101, 8));
    let (settings, repo) = (common::settings(), common::repo());
    let engine = WorkflowEngine::new(common::session(&forge, &settings, &repo));

    engine.move_to_in_progress(7, 2024).unwrap();

    assert_eq!(forge.cards_in(11), vec![100, 101]);
}

#[test]
fn test_already_in_progress_is_noop() {
    let forge = board_2024().with_issue(issue(7, "Lantern layout")).with_card(11, issue_card(100, 7));
    let (settings, repo) = (common::settings(), common::repo());
    let engine = WorkflowEngine::new(common::session(&forge, &settings, &repo));

    let outcome = engine.move_to_in_progress(7, 2024).unwrap();

    assert!(matches!(outcome, MoveOutcome::AlreadyInProgress { .. }));
    assert_eq!(forge.move_count(), 0);
    assert_eq!(forge.cards_in(11), vec![100]);
}

#[test]
fn test_repeated_start_moves_once() {
    let forge = board_2024().with_issue(issue(7, "Lantern layout")).with_card(10, issue_card(100, 7));
    let (settings, repo) = (common::settings(), common::repo());
    let engine = WorkflowEngine::new(common::session(&forge, &settings, &repo));

    engine.move_to_in_progress(7, 2024).unwrap();
    let second = engine.move_to_in_progress(7, 2024).unwrap();

    assert!(matches!(second, MoveOutcome::AlreadyInProgress { .. }));
    assert_eq!(forge.move_count(), 1);
}

#[test]
fn test_card_not_on_board_leaves_board_unchanged() {
    let forge = board_2024()
        .with_issue(issue(7, "Lantern layout"))
        .with_issue(issue(8, "Stage schedule"))
        .with_card(10, issue_card(101, 8));
    let (settings, repo) = (common::settings(), common::repo());
    let engine = WorkflowEngine::new(common::session(&forge, &settings, &repo));

    let err = engine.move_to_in_progress(7, 2024).unwrap_err();

    assert!(matches!(err, MatsuriError::CardNotOnBoard { issue: 7, .. }));
    assert_eq!(forge.move_count(), 0);
    assert_eq!(forge.cards_in(10), vec![101]);
}

#[test]
fn test_card_in_done_is_not_on_board() {
    let forge = board_2024().with_issue(issue(7, "Lantern layout")).with_card(12, issue_card(100, 7));
    let (settings, repo) = (common::settings(), common::repo());
    let engine = WorkflowEngine::new(common::session(&forge, &settings, &repo));

    let err = engine.move_to_in_progress(7, 2024).unwrap_err();
    assert!(matches!(err, MatsuriError::CardNotOnBoard { .. }));
    assert_eq!(forge.cards_in(12), vec![100]);
}

#[test]
fn test_other_repository_card_is_ignored() {
    let forge = board_2024().with_issue(issue(7, "Lantern layout")).with_card(10, card_for(100, "api", "issues", 7));
    let (settings, repo) = (common::settings(), common::repo());
    let engine = WorkflowEngine::new(common::session(&forge, &settings, &repo));

    let err = engine.move_to_in_progress(7, 2024).unwrap_err();
    assert!(matches!(err, MatsuriError::CardNotOnBoard { .. }));
    assert_eq!(forge.move_count(), 0);
}

#[test]
fn test_stale_card_is_never_moved() {
    let forge = board_2024().with_broken_issue(7).with_card(10, issue_card(100, 7));
    let (settings, repo) = (common::settings(), common::repo());
    let engine = WorkflowEngine::new(common::session(&forge, &settings, &repo));

    let err = engine.move_to_in_progress(7, 2024).unwrap_err();
    assert!(matches!(err, MatsuriError::CardNotOnBoard { .. }));
    assert_eq!(forge.move_count(), 0);
}

// =============================================================================
// BOARD RESOLUTION FAILURES
// =============================================================================

#[test]
fn test_missing_board_is_unavailable() {
    let forge = board_2024().with_issue(issue(7, "Lantern layout")).with_card(10, issue_card(100, 7));
    let (settings, repo) = (common::settings(), common::repo());
    let engine = WorkflowEngine::new(common::session(&forge, &settings, &repo));

    match engine.move_to_in_progress(7, 2030).unwrap_err() {
        MatsuriError::BoardUnavailable { year, source } => {
            assert_eq!(year, 2030);
            assert!(matches!(*source, MatsuriError::ProjectNotFound { ref name } if name == "Matsuri 2030"));
        },
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(forge.move_count(), 0);
}

#[test]
fn test_missing_column_is_unavailable() {
    let forge = MockForge::new()
        .with_board(1, "Matsuri 2024")
        .with_column(1, 10, "To do")
        .with_issue(issue(7, "Lantern layout"))
        .with_card(10, issue_card(100, 7));
    let (settings, repo) = (common::settings(), common::repo());
    let engine = WorkflowEngine::new(common::session(&forge, &settings, &repo));

    match engine.move_to_in_progress(7, 2024).unwrap_err() {
        MatsuriError::BoardUnavailable { source, .. } => {
            assert!(matches!(*source, MatsuriError::ColumnNotFound { ref column, .. } if column == "In progress"));
        },
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(forge.cards_in(10), vec![100]);
}

#[test]
fn test_column_names_are_case_sensitive() {
    let forge = MockForge::new()
        .with_board(1, "Matsuri 2024")
        .with_column(1, 10, "To do")
        .with_column(1, 11, "In Progress")
        .with_issue(issue(7, "Lantern layout"))
        .with_card(10, issue_card(100, 7));
    let (settings, repo) = (common::settings(), common::repo());
    let engine = WorkflowEngine::new(common::session(&forge, &settings, &repo));

    assert!(matches!(engine.move_to_in_progress(7, 2024), Err(MatsuriError::BoardUnavailable { .. })));
}

// =============================================================================
// STATE TESTS
// =============================================================================

#[test]
fn test_state_of() {
    let forge = board_2024()
        .with_issue(issue(7, "Lantern layout"))
        .with_issue(issue(8, "Stage schedule"))
        .with_issue(issue(9, "Volunteer list"))
        .with_card(10, issue_card(100, 7))
        .with_card(11, issue_card(101, 8));
    let (settings, repo) = (common::settings(), common::repo());
    let engine = WorkflowEngine::new(common::session(&forge, &settings, &repo));

    let (board, state) = engine.state_of(7, 2024).unwrap();
    assert_eq!(board, "Matsuri 2024");
    assert!(matches!(state, WorkflowState::NotStarted { card } if card.id == 100));

    let (_, state) = engine.state_of(8, 2024).unwrap();
    assert!(matches!(state, WorkflowState::Active { card } if card.id == 101));

    let (_, state) = engine.state_of(9, 2024).unwrap();
    assert_eq!(state, WorkflowState::Untracked);
}
