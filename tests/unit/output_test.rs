//! Tests for JSON output shapes

use matsuri::core::models::Card;
use matsuri::core::services::{KanbanColumn, KanbanEntry, Listing, MoveOutcome};
use matsuri::output::{KanbanResult, PullRequestResult};

#[test]
fn test_kanban_json_flattens_listing() {
    let result = KanbanResult {
        board: "Matsuri 2024".into(),
        columns: vec![KanbanColumn {
            name: "To do".into(),
            cards: Listing {
                items: vec![KanbanEntry {
                    number: 4,
                    repository: "website".into(),
                    title: "Poster".into(),
                    is_pull_request: false,
                }],
                skipped: vec![],
            },
        }],
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["columns"][0]["name"], "To do");
    assert_eq!(json["columns"][0]["items"][0]["number"], 4);
    assert!(json["columns"][0]["skipped"].as_array().unwrap().is_empty());
}

#[test]
fn test_pull_request_json_omits_missing_error() {
    let result = PullRequestResult {
        number: 12,
        url: "https://github.com/MatsuriJapon/website/pull/12".into(),
        card_id: Some(77),
        filing_error: None,
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["card_id"], 77);
    assert!(json.get("filing_error").is_none());
}

#[test]
fn test_move_outcome_is_tagged() {
    let outcome = MoveOutcome::AlreadyInProgress {
        board: "Matsuri 2024".into(),
        card: Card {
            id: 3,
            content_url: None,
        },
    };

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["outcome"], "already_in_progress");
    assert_eq!(json["card"]["id"], 3);
}
