//! Workflow engine - move an issue's card from "To do" to "In progress"
//!
//! Observable states per issue, derived from column membership:
//!
//! | State       | Card location          |
//! |-------------|------------------------|
//! | `NotStarted`| "To do"                |
//! | `Active`    | "In progress"          |
//! | `Untracked` | neither tracked column |
//!
//! The column reads and the move are separate API calls with no
//! transactional guarantee. A concurrent board edit between them can yield
//! a stale read; with a single operator that race is accepted.

use serde::Serialize;

use crate::core::models::{Card, CardPosition, Column};
use crate::error::{MatsuriError, Result};

use super::{CardIndex, ColumnResolver, ProjectLocator, Session};

/// Where an issue sits on its board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum WorkflowState {
    /// Card in the "to do" column
    NotStarted {
        /// The card
        card: Card,
    },
    /// Card in the "in progress" column
    Active {
        /// The card
        card: Card,
    },
    /// Card in neither tracked column
    Untracked,
}

/// Result of a successful transition request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// The card was moved to the top of "in progress"
    Moved {
        /// Board name
        board: String,
        /// The moved card
        card: Card,
    },
    /// The card already was in "in progress"; nothing changed
    AlreadyInProgress {
        /// Board name
        board: String,
        /// The card
        card: Card,
    },
}

/// Drives card transitions on the yearly board
#[derive(Debug, Clone, Copy)]
pub struct WorkflowEngine<'a> {
    session: Session<'a>,
}

impl<'a> WorkflowEngine<'a> {
    /// Create an engine
    #[must_use]
    pub const fn new(session: Session<'a>) -> Self {
        Self { session }
    }

    /// Locate an issue's card on the board for `year`
    pub fn state_of(&self, issue: u64, year: i32) -> Result<(String, WorkflowState)> {
        let board = self.tracked_columns(year)?;
        let index = CardIndex::new(self.session);
        if let Some(card) = index.find_card_for_issue(&board.todo, issue)? {
            return Ok((board.name, WorkflowState::NotStarted { card }));
        }
        if let Some(card) = index.find_card_for_issue(&board.in_progress, issue)? {
            return Ok((board.name, WorkflowState::Active { card }));
        }
        Ok((board.name, WorkflowState::Untracked))
    }

    /// Start work on an issue
    ///
    /// Succeeds without mutation when the card is already in progress, so
    /// the operation can be retried freely.
    pub fn move_to_in_progress(&self, issue: u64, year: i32) -> Result<MoveOutcome> {
        let board = self.tracked_columns(year)?;
        let index = CardIndex::new(self.session);

        if let Some(card) = index.find_card_for_issue(&board.todo, issue)? {
            self.session.forge().move_card(&card, &board.in_progress, CardPosition::Top)?;
            log::info!("moved card {} for issue #{issue} to {}", card.id, board.in_progress.name);
            return Ok(MoveOutcome::Moved {
                board: board.name,
                card,
            });
        }

        if let Some(card) = index.find_card_for_issue(&board.in_progress, issue)? {
            log::debug!("issue #{issue} already in {}", board.in_progress.name);
            return Ok(MoveOutcome::AlreadyInProgress {
                board: board.name,
                card,
            });
        }

        Err(MatsuriError::CardNotOnBoard {
            issue,
            board: board.name,
            todo: board.todo.name,
            in_progress: board.in_progress.name,
        })
    }

    fn tracked_columns(&self, year: i32) -> Result<TrackedColumns> {
        let settings = &self.session.settings().board;
        let resolve = || -> Result<TrackedColumns> {
            let project = ProjectLocator::new(self.session).find_project_for_year(year)?;
            let resolver = ColumnResolver::new(self.session);
            let todo = resolver.find_column(&project, &settings.todo_column)?;
            let in_progress = resolver.find_column(&project, &settings.in_progress_column)?;
            Ok(TrackedColumns {
                name: project.name,
                todo,
                in_progress,
            })
        };
        resolve().map_err(|source| MatsuriError::BoardUnavailable {
            year,
            source: Box::new(source),
        })
    }
}

struct TrackedColumns {
    name: String,
    todo: Column,
    in_progress: Column,
}
