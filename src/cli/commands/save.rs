//! Save command - push the topic branch

use matsuri::core::services::{IssueValidator, branch};
use matsuri::output::OperationResult;

use super::Context;

/// Push `ISSUE-<n>` to origin
pub fn save(ctx: &Context, issue: u64) -> anyhow::Result<()> {
    IssueValidator::new(ctx.session()).require_known_issue(issue)?;
    push_branch(ctx, issue)?;
    OperationResult {
        success: true,
        message: format!("Saved ISSUE-{issue}"),
    }
    .render(ctx.mode);
    Ok(())
}

/// Push the topic branch, printing git's output
pub(super) fn push_branch(ctx: &Context, issue: u64) -> anyhow::Result<()> {
    ctx.say("Pushing your changes to GitHub...");
    let output = branch::save_topic_branch(&ctx.vcs, issue)?;
    ctx.echo(&output);
    Ok(())
}
