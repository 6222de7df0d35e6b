//! Kanban command - print a board

use matsuri::core::services::{ProjectLocator, kanban_view};
use matsuri::output::KanbanResult;

use super::Context;

/// Print every column of the board for `year`, or of the active board
pub fn kanban(ctx: &Context, year: Option<i32>) -> anyhow::Result<()> {
    let session = ctx.session();
    let locator = ProjectLocator::new(session);
    let board = match year {
        Some(year) => locator.find_project_for_year(year)?,
        None => locator.find_current_project()?,
    };
    let columns = kanban_view(session, &board)?;
    KanbanResult {
        board: board.name,
        columns,
    }
    .render(ctx.mode);
    Ok(())
}
