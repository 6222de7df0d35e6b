//! Pull request composer
//!
//! Builds a pull request from an issue, submits it and files it as a card
//! in the current board's "to do" column. Filing is best-effort once the
//! pull request exists: a filing failure is returned next to the created
//! pull request, never instead of it.

use crate::core::models::{Card, Issue, NewCard, NewPullRequest, PullRequest};
use crate::error::{MatsuriError, Result};

use super::{ColumnResolver, ProjectLocator, Session, cycle};

/// Which pull request template to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrTemplate {
    /// Regular pull request for an issue
    Standard,
    /// Follow-up pull request fixing an earlier one
    Fix,
}

/// Branch name for an issue, e.g. `ISSUE-42`
#[must_use]
pub fn issue_branch(number: u64) -> String {
    format!("ISSUE-{number}")
}

/// Build the pull request for `issue` against `base`
///
/// `no_close` keeps merging from closing the issue.
#[must_use]
pub fn compose(issue: &Issue, base: &str, template: PrTemplate, no_close: bool) -> NewPullRequest {
    let n = issue.number;
    let (title, body) = match template {
        PrTemplate::Standard => {
            let body = if no_close {
                format!("Related to #{n}\n")
            } else {
                format!("Closes #{n}\n")
            };
            (format!("ISSUE-{n}: {}", issue.title), body)
        },
        PrTemplate::Fix => {
            let mut body = format!("Fixes PR for #{n}\n");
            if !no_close {
                body.push_str(&format!("Closes #{n}\n"));
            }
            (format!("ISSUE-{n}-fix: {}", issue.title), body)
        },
    };
    NewPullRequest {
        title,
        head: issue_branch(n),
        base: base.to_string(),
        body,
    }
}

/// A created pull request and the outcome of filing it on the board
#[derive(Debug)]
pub struct FiledPullRequest {
    /// The pull request, which exists regardless of `filing`
    pub pull_request: PullRequest,
    /// The card created for it, or why none was
    pub filing: Result<Card>,
}

impl FiledPullRequest {
    /// Collapse into a single result; a filing failure becomes
    /// `PartialSuccess` carrying the pull request URL
    pub fn into_result(self) -> Result<(PullRequest, Card)> {
        match self.filing {
            Ok(card) => Ok((self.pull_request, card)),
            Err(source) => Err(MatsuriError::PartialSuccess {
                url: self.pull_request.html_url,
                source: Box::new(source),
            }),
        }
    }
}

/// Creates pull requests and files them on the board
#[derive(Debug, Clone, Copy)]
pub struct PullRequestComposer<'a> {
    session: Session<'a>,
}

impl<'a> PullRequestComposer<'a> {
    /// Create a composer
    #[must_use]
    pub const fn new(session: Session<'a>) -> Self {
        Self { session }
    }

    /// Open the pull request for an issue
    pub fn create_pr(&self, issue: u64, no_close: bool) -> Result<FiledPullRequest> {
        self.create_from_template(issue, PrTemplate::Standard, no_close)
    }

    /// Open a fix pull request for an issue
    pub fn create_fix_pr(&self, issue: u64, no_close: bool) -> Result<FiledPullRequest> {
        self.create_from_template(issue, PrTemplate::Fix, no_close)
    }

    /// Submit a pull request, then file it in the "to do" column
    ///
    /// The board is the one for the cycle year of `new_pr.base`, which is
    /// the repository's default branch.
    pub fn create_and_file_pr(&self, new_pr: &NewPullRequest) -> Result<FiledPullRequest> {
        let repo = self.session.repo()?;
        let pull_request = self.session.forge().create_pull_request(repo, new_pr)?;
        log::info!("created pull request #{} ({})", pull_request.number, pull_request.html_url);

        let filing = self.file_on_board(&pull_request, &new_pr.base);
        match &filing {
            Ok(card) => log::info!("filed pull request #{} as card {}", pull_request.number, card.id),
            Err(e) => log::warn!("pull request #{} not filed: {e}", pull_request.number),
        }
        Ok(FiledPullRequest {
            pull_request,
            filing,
        })
    }

    fn create_from_template(
        &self,
        issue: u64,
        template: PrTemplate,
        no_close: bool,
    ) -> Result<FiledPullRequest> {
        let repo = self.session.repo()?;
        let forge = self.session.forge();
        let issue = forge.get_issue(repo, issue)?;
        let base = forge.get_repository(repo)?.default_branch;
        let new_pr = compose(&issue, &base, template, no_close);
        self.create_and_file_pr(&new_pr)
    }

    fn file_on_board(&self, pull_request: &PullRequest, default_branch: &str) -> Result<Card> {
        let settings = self.session.settings();
        let year = cycle::cycle_year(default_branch, self.session.today(), settings.cycle.cutoff_month);
        let board = ProjectLocator::new(self.session).find_project_for_year(year)?;
        let todo = ColumnResolver::new(self.session).find_column(&board, &settings.board.todo_column)?;
        self.session.forge().create_card(&todo, NewCard::pull_request(pull_request.id))
    }
}
