//! Pr and fix commands - open pull requests for an issue

use matsuri::core::services::{FiledPullRequest, IssueValidator, PullRequestComposer};
use matsuri::output::PullRequestResult;

use super::Context;
use super::save::push_branch;

/// Push the topic branch and open its pull request
pub fn pr(ctx: &Context, issue: u64, no_close: bool) -> anyhow::Result<()> {
    let session = ctx.session();
    IssueValidator::new(session).require_open_issue(issue)?;
    push_branch(ctx, issue)?;

    ctx.say(&format!("Creating a PR for ISSUE-{issue}..."));
    let filed = PullRequestComposer::new(session).create_pr(issue, no_close)?;
    render(ctx, &filed);
    filed.into_result()?;
    Ok(())
}

/// Push the topic branch, open a fix pull request and reopen the issue
///
/// A filing failure outranks a reopen failure: the exit status stays the
/// partial-success one and the reopen error is logged.
pub fn fix(ctx: &Context, issue: u64, no_close: bool) -> anyhow::Result<()> {
    let session = ctx.session();
    let validator = IssueValidator::new(session);
    validator.require_known_issue(issue)?;
    push_branch(ctx, issue)?;

    ctx.say(&format!("Creating a fix PR for ISSUE-{issue}..."));
    let filed = PullRequestComposer::new(session).create_fix_pr(issue, no_close)?;
    render(ctx, &filed);
    let url = filed.pull_request.html_url.clone();

    match (filed.into_result(), validator.reopen_issue(issue)) {
        (Ok(_), Ok(reopened)) => {
            if reopened {
                ctx.say(&format!("Reopened issue #{issue}"));
            }
            Ok(())
        },
        (Ok(_), Err(e)) => Err(anyhow::Error::from(e)
            .context(format!("Created PR {url} but could not reopen issue #{issue}"))),
        (Err(partial), Ok(reopened)) => {
            if reopened {
                ctx.say(&format!("Reopened issue #{issue}"));
            }
            Err(partial.into())
        },
        (Err(partial), Err(e)) => {
            log::error!("could not reopen issue #{issue}: {e}");
            Err(partial.into())
        },
    }
}

/// Print the pull request and whether it made it onto the board
fn render(ctx: &Context, filed: &FiledPullRequest) {
    PullRequestResult {
        number: filed.pull_request.number,
        url: filed.pull_request.html_url.clone(),
        card_id: filed.filing.as_ref().ok().map(|c| c.id),
        filing_error: filed.filing.as_ref().err().map(ToString::to_string),
    }
    .render(ctx.mode);
}
