//! Explicit capability object threaded through every service
//!
//! Built once at process start from the API client, the settings and the
//! repository identity (when the working directory has one).

use chrono::NaiveDate;

use crate::config::Settings;
use crate::core::models::RepoIdentity;
use crate::core::ports::ForgeApi;
use crate::error::{MatsuriError, Result};

/// Everything a service needs to talk to the forge
#[derive(Clone, Copy)]
pub struct Session<'a> {
    forge: &'a dyn ForgeApi,
    settings: &'a Settings,
    repo: Option<&'a RepoIdentity>,
    today: NaiveDate,
}

impl<'a> Session<'a> {
    /// Create a session dated today (local time)
    #[must_use]
    pub fn new(forge: &'a dyn ForgeApi, settings: &'a Settings, repo: Option<&'a RepoIdentity>) -> Self {
        Self {
            forge,
            settings,
            repo,
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Pin the session's calendar date
    #[must_use]
    pub const fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// The hosting-platform capability
    #[must_use]
    pub fn forge(&self) -> &'a dyn ForgeApi {
        self.forge
    }

    /// Loaded settings
    #[must_use]
    pub const fn settings(&self) -> &'a Settings {
        self.settings
    }

    /// Calendar date used by the cycle policy
    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// The current repository, or `NotInRepository`
    pub fn repo(&self) -> Result<&'a RepoIdentity> {
        self.repo.ok_or_else(|| MatsuriError::NotInRepository {
            owner: self.settings.forge.owner.clone(),
        })
    }
}

impl std::fmt::Debug for Session<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("repo", &self.repo)
            .field("today", &self.today)
            .finish_non_exhaustive()
    }
}
