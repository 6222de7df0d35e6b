//! Issue validator - is a number a usable issue?

use crate::core::models::{Issue, IssueState};
use crate::error::{MatsuriError, Result};

use super::Session;

/// Checks issue numbers before any mutating call
#[derive(Debug, Clone, Copy)]
pub struct IssueValidator<'a> {
    session: Session<'a>,
}

impl<'a> IssueValidator<'a> {
    /// Create a validator
    #[must_use]
    pub const fn new(session: Session<'a>) -> Self {
        Self { session }
    }

    /// The numbered item exists, is open and is not a pull request
    ///
    /// Lookup failures of any kind count as `false`.
    #[must_use]
    pub fn is_open_issue(&self, number: u64) -> bool {
        self.require_open_issue(number).is_ok()
    }

    /// The numbered item exists and is not a pull request, open or closed
    #[must_use]
    pub fn is_known_issue(&self, number: u64) -> bool {
        self.require_known_issue(number).is_ok()
    }

    /// Like [`Self::is_open_issue`], but API and repository failures keep
    /// their own error instead of becoming a validation failure
    pub fn require_open_issue(&self, number: u64) -> Result<()> {
        match self.lookup(number)? {
            Some(issue) if issue.is_open_issue() => Ok(()),
            Some(issue) if issue.is_pull_request => {
                Err(MatsuriError::validation(format!("#{number} is a pull request, not an issue")))
            },
            Some(_) => Err(MatsuriError::validation(format!("issue #{number} is closed"))),
            None => Err(MatsuriError::validation(format!("issue #{number} doesn't exist"))),
        }
    }

    /// Like [`Self::is_known_issue`], with the same error handling as
    /// [`Self::require_open_issue`]
    pub fn require_known_issue(&self, number: u64) -> Result<()> {
        match self.lookup(number)? {
            Some(issue) if !issue.is_pull_request => Ok(()),
            Some(_) => Err(MatsuriError::validation(format!("#{number} is a pull request, not an issue"))),
            None => Err(MatsuriError::validation(format!("issue #{number} doesn't exist"))),
        }
    }

    /// Reopen a closed issue
    ///
    /// Returns `false` without mutation for open issues and pull requests.
    pub fn reopen_issue(&self, number: u64) -> Result<bool> {
        let repo = self.session.repo()?;
        let forge = self.session.forge();
        let issue = forge.get_issue(repo, number)?;
        if issue.state == IssueState::Open || issue.is_pull_request {
            return Ok(false);
        }
        forge.edit_issue_state(repo, number, IssueState::Open)?;
        log::info!("reopened issue #{number}");
        Ok(true)
    }

    /// Open issues of the current repository, pull requests excluded
    pub fn open_issues(&self) -> Result<Vec<Issue>> {
        let repo = self.session.repo()?;
        let issues = self.session.forge().list_repo_issues(repo)?;
        Ok(issues.into_iter().filter(Issue::is_open_issue).collect())
    }

    /// `None` only when the number is unknown to the repository
    fn lookup(&self, number: u64) -> Result<Option<Issue>> {
        let repo = self.session.repo()?;
        match self.session.forge().get_issue(repo, number) {
            Ok(issue) => Ok(Some(issue)),
            Err(MatsuriError::IssueNotFound { .. }) => {
                log::debug!("issue #{number} not found in {repo}");
                Ok(None)
            },
            Err(e) => Err(e),
        }
    }
}
