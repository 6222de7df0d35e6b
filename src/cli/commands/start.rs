//! Start command - begin work on an issue

use matsuri::core::services::{
    IssueValidator, MoveOutcome, ProjectLocator, WorkflowEngine, branch, issue_branch,
};
use matsuri::output::OperationResult;

use super::Context;

/// Move the issue's card to "in progress" and check out its topic branch
pub fn start(ctx: &Context, issue: u64, year: Option<i32>) -> anyhow::Result<()> {
    let session = ctx.session();
    IssueValidator::new(session).require_open_issue(issue)?;

    let repo = session.repo()?;
    let default_branch = session.forge().get_repository(repo)?.default_branch;

    ctx.say("Checking status of current branch...");
    for output in branch::prepare_checkout(&ctx.vcs, &default_branch)? {
        ctx.echo(&output);
    }

    let year = match year {
        Some(year) => year,
        None => ProjectLocator::new(session).current_year()?,
    };
    // Some issues are never put on a board
    match WorkflowEngine::new(session).move_to_in_progress(issue, year) {
        Ok(MoveOutcome::Moved { board, .. }) => {
            ctx.say(&format!("Moved #{issue} to {} on {board}", ctx.settings.board.in_progress_column));
        },
        Ok(MoveOutcome::AlreadyInProgress { board, .. }) => {
            ctx.say(&format!("#{issue} is already in {} on {board}", ctx.settings.board.in_progress_column));
        },
        Err(e) => log::warn!("{e}"),
    }

    ctx.say("Checking out topic branch...");
    let output = branch::start_topic_branch(&ctx.vcs, issue)?;
    ctx.echo(&output);

    OperationResult {
        success: true,
        message: format!("You are now working in branch {}", issue_branch(issue)),
    }
    .render(ctx.mode);
    Ok(())
}
