//! Project locator - find the yearly board

use crate::config::BoardScope;
use crate::core::models::ProjectBoard;
use crate::error::{MatsuriError, Result};

use super::{Session, cycle};

/// Finds project boards by name
#[derive(Debug, Clone, Copy)]
pub struct ProjectLocator<'a> {
    session: Session<'a>,
}

impl<'a> ProjectLocator<'a> {
    /// Create a locator
    #[must_use]
    pub const fn new(session: Session<'a>) -> Self {
        Self { session }
    }

    /// Board name for a cycle year, e.g. `"Matsuri 2024"`
    #[must_use]
    pub fn board_name(&self, year: i32) -> String {
        format!("{} {year}", self.session.settings().board.prefix)
    }

    /// The board named exactly `"<prefix> <year>"`
    pub fn find_project_for_year(&self, year: i32) -> Result<ProjectBoard> {
        let name = self.board_name(year);
        self.list_boards()?
            .into_iter()
            .find(|b| b.name == name)
            .ok_or(MatsuriError::ProjectNotFound { name })
    }

    /// The oldest board whose name carries the organization prefix
    ///
    /// Boards are created once per cycle, so the oldest live one is the
    /// active one.
    pub fn find_current_project(&self) -> Result<ProjectBoard> {
        let prefix = &self.session.settings().board.prefix;
        let spaced = format!("{prefix} ");
        self.list_boards()?
            .into_iter()
            .filter(|b| b.name == *prefix || b.name.starts_with(&spaced))
            .min_by_key(|b| b.id)
            .ok_or_else(|| MatsuriError::ProjectNotFound {
                name: format!("{prefix} *"),
            })
    }

    /// The active cycle year of the current repository
    ///
    /// Read from the default branch name, falling back to the calendar
    /// policy. Independent of which boards exist.
    pub fn current_year(&self) -> Result<i32> {
        let repo = self.session.repo()?;
        let repository = self.session.forge().get_repository(repo)?;
        Ok(cycle::cycle_year(
            &repository.default_branch,
            self.session.today(),
            self.session.settings().cycle.cutoff_month,
        ))
    }

    fn list_boards(&self) -> Result<Vec<ProjectBoard>> {
        let forge = self.session.forge();
        match self.session.settings().board.scope {
            BoardScope::Organization => forge.list_org_projects(&self.session.settings().forge.owner),
            BoardScope::Repository => forge.list_repo_projects(self.session.repo()?),
        }
    }
}
