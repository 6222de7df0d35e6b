//! Column resolver - find a board's column by name

use crate::core::models::{Column, ProjectBoard};
use crate::error::{MatsuriError, Result};

use super::Session;

/// Resolves columns by exact, case-sensitive name
///
/// Columns are fetched on every call; a board can change between two
/// operations of the same run.
#[derive(Debug, Clone, Copy)]
pub struct ColumnResolver<'a> {
    session: Session<'a>,
}

impl<'a> ColumnResolver<'a> {
    /// Create a resolver
    #[must_use]
    pub const fn new(session: Session<'a>) -> Self {
        Self { session }
    }

    /// The column of `board` named `name`
    pub fn find_column(&self, board: &ProjectBoard, name: &str) -> Result<Column> {
        let columns = self.session.forge().list_columns(board)?;
        columns.into_iter().find(|c| c.name == name).ok_or_else(|| MatsuriError::ColumnNotFound {
            board: board.name.clone(),
            column: name.to_string(),
        })
    }
}
