//! Card index - cards and issues of a column
//!
//! Listings favor partial results: a card whose issue cannot be fetched is
//! skipped and reported in [`Listing::skipped`] instead of failing the call.

use serde::Serialize;

use crate::core::models::{Card, CardKind, Column, Issue};
use crate::error::Result;

use super::{Session, card_locator};

/// A card left out of a listing because its lookup failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedCard {
    /// Card identifier
    pub card_id: u64,
    /// Why it was skipped
    pub reason: String,
}

/// Successful entries plus the cards that could not be resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing<T> {
    /// Resolved entries, in column order
    pub items: Vec<T>,
    /// Cards whose lookup failed
    pub skipped: Vec<SkippedCard>,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

impl<T> Listing<T> {
    /// Record a failed lookup
    pub fn skip(&mut self, card: &Card, reason: impl Into<String>) {
        let reason = reason.into();
        log::debug!("skipping card {}: {reason}", card.id);
        self.skipped.push(SkippedCard {
            card_id: card.id,
            reason,
        });
    }
}

/// Enumerates a column's cards and maps them to issues
#[derive(Debug, Clone, Copy)]
pub struct CardIndex<'a> {
    session: Session<'a>,
}

impl<'a> CardIndex<'a> {
    /// Create an index
    #[must_use]
    pub const fn new(session: Session<'a>) -> Self {
        Self { session }
    }

    /// One fixed-size page of the column's cards
    pub fn cards_in_column(&self, column: &Column) -> Result<Vec<Card>> {
        let per_page = self.session.settings().board.card_page_size;
        let cards = self.session.forge().list_cards(column, per_page)?;
        if cards.len() >= per_page {
            log::debug!("column {} filled a whole page of {per_page} cards", column.name);
        }
        Ok(cards)
    }

    /// Issues of the current repository with a card in the column
    ///
    /// Pull requests are filtered out. Cards whose issue lookup fails are
    /// reported as skipped.
    pub fn issues_in_column(&self, column: &Column) -> Result<Listing<Issue>> {
        let repo = self.session.repo()?;
        let mut listing = Listing::default();
        for card in self.cards_in_column(column)? {
            let CardKind::Issue(number) = card_locator::classify(&card, repo) else {
                continue;
            };
            match self.session.forge().get_issue(repo, number) {
                Ok(issue) if issue.is_pull_request => {},
                Ok(issue) => listing.items.push(issue),
                Err(e) => listing.skip(&card, e.to_string()),
            }
        }
        Ok(listing)
    }

    /// The column's card for an issue of the current repository
    ///
    /// A card whose referenced issue can no longer be fetched is never
    /// returned, even when the number matches.
    pub fn find_card_for_issue(&self, column: &Column, issue: u64) -> Result<Option<Card>> {
        let repo = self.session.repo()?;
        for card in self.cards_in_column(column)? {
            if card_locator::classify(&card, repo) != CardKind::Issue(issue) {
                continue;
            }
            match self.session.forge().get_issue(repo, issue) {
                Ok(_) => return Ok(Some(card)),
                Err(e) => log::debug!("card {} references unreachable issue #{issue}: {e}", card.id),
            }
        }
        Ok(None)
    }
}
