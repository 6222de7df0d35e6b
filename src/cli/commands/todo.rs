//! Todo command - list open issues

use matsuri::core::services::{CardIndex, ColumnResolver, IssueValidator, ProjectLocator};
use matsuri::output::IssueListResult;

use super::Context;

/// List the repository's open issues, or those in a board column
pub fn todo(ctx: &Context, year: Option<i32>, column: Option<&str>) -> anyhow::Result<()> {
    let session = ctx.session();

    let result = if let Some(year) = year {
        let column_name = column.unwrap_or(&ctx.settings.board.todo_column);
        let board = ProjectLocator::new(session).find_project_for_year(year)?;
        let column = ColumnResolver::new(session).find_column(&board, column_name)?;
        let listing = CardIndex::new(session).issues_in_column(&column)?;
        IssueListResult {
            source: format!("{} / {}", board.name, column.name),
            issues: listing.items,
            skipped: listing.skipped,
        }
    } else {
        let repo = session.repo()?;
        IssueListResult {
            source: repo.full_name(),
            issues: IssueValidator::new(session).open_issues()?,
            skipped: Vec::new(),
        }
    };

    result.render(ctx.mode);
    Ok(())
}
