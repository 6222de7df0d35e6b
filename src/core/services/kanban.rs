//! Kanban view - every column of a board with its resolved cards
//!
//! Boards are organization-wide, so each card is resolved against the
//! repository its content URL names rather than the current one.

use serde::Serialize;

use crate::core::models::{ContentEndpoint, ProjectBoard, RepoIdentity};
use crate::error::Result;

use super::{CardIndex, Listing, Session, card_locator};

/// A resolved card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KanbanEntry {
    /// Issue or pull request number
    pub number: u64,
    /// Repository name
    pub repository: String,
    /// Title
    pub title: String,
    /// Whether the card is a pull request
    pub is_pull_request: bool,
}

/// One column of the view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KanbanColumn {
    /// Column name
    pub name: String,
    /// Resolved cards and skipped ones
    #[serde(flatten)]
    pub cards: Listing<KanbanEntry>,
}

/// Build the view of `board`
pub fn kanban_view(session: Session<'_>, board: &ProjectBoard) -> Result<Vec<KanbanColumn>> {
    let forge = session.forge();
    let index = CardIndex::new(session);
    let mut view = Vec::new();

    for column in forge.list_columns(board)? {
        let mut cards = Listing::default();
        for card in index.cards_in_column(&column)? {
            let Some(content) = card.content_url.as_deref().and_then(card_locator::parse_content_ref)
            else {
                cards.skip(&card, "card does not reference an issue or pull request");
                continue;
            };
            let repo = RepoIdentity::new(content.owner.as_str(), content.repo.as_str());
            match forge.get_issue(&repo, content.number) {
                Ok(issue) => cards.items.push(KanbanEntry {
                    number: issue.number,
                    repository: content.repo,
                    title: issue.title,
                    is_pull_request: issue.is_pull_request
                        || content.endpoint == ContentEndpoint::Pulls,
                }),
                Err(e) => cards.skip(&card, e.to_string()),
            }
        }
        view.push(KanbanColumn {
            name: column.name,
            cards,
        });
    }
    Ok(view)
}
