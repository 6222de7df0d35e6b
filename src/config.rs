//! Configuration management
//!
//! Settings are read from `~/.git-matsuri/config.toml` (see [`crate::paths`]).
//! Every key has a default, so a missing file yields the organization's
//! standard setup. `MATSURI_API_URL` overrides the API base URL.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MatsuriError, Result};
use crate::paths;

/// Environment variable overriding `forge.api_url`
pub const API_URL_ENV: &str = "MATSURI_API_URL";

/// Largest page the REST API serves
pub const MAX_CARD_PAGE_SIZE: usize = 100;

/// All git-matsuri settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Hosting platform settings
    #[serde(default)]
    pub forge: ForgeSettings,
    /// Board naming and column settings
    #[serde(default)]
    pub board: BoardSettings,
    /// Yearly cycle policy
    #[serde(default)]
    pub cycle: CycleSettings,
    /// Repository setup settings
    #[serde(default)]
    pub setup: SetupSettings,
}

/// Hosting platform settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeSettings {
    /// REST API base URL
    pub api_url: String,
    /// Organization owning the repositories and boards
    pub owner: String,
    /// Environment variable holding the API token
    pub token_env: String,
    /// Repository publishing this tool's releases
    pub tool_repo: String,
}

impl Default for ForgeSettings {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            owner: "MatsuriJapon".to_string(),
            token_env: "MATSURI_TOKEN".to_string(),
            tool_repo: "git-matsuri".to_string(),
        }
    }
}

/// Where project boards live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardScope {
    /// Boards owned by the organization
    #[default]
    Organization,
    /// Boards owned by the current repository
    Repository,
}

/// Board naming and column settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    /// Board names are `"<prefix> <year>"`
    pub prefix: String,
    /// Where boards are listed from
    pub scope: BoardScope,
    /// Column holding not-yet-started work
    pub todo_column: String,
    /// Column holding active work
    pub in_progress_column: String,
    /// Fixed page size for card listings
    pub card_page_size: usize,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            prefix: "Matsuri".to_string(),
            scope: BoardScope::Organization,
            todo_column: "To do".to_string(),
            in_progress_column: "In progress".to_string(),
            card_page_size: MAX_CARD_PAGE_SIZE,
        }
    }
}

/// Yearly cycle policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleSettings {
    /// After this month (1-12) the calendar fallback targets next year
    pub cutoff_month: u32,
}

impl Default for CycleSettings {
    fn default() -> Self {
        Self { cutoff_month: 2 }
    }
}

/// Repository setup settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupSettings {
    /// Domain of the organization email address set on fresh clones
    pub email_domain: String,
}

impl Default for SetupSettings {
    fn default() -> Self {
        Self {
            email_domain: "festivaljapon.com".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the default location and apply env overrides
    pub fn load() -> Result<Self> {
        let mut settings = Self::load_from(&paths::global_config())?;
        if let Ok(url) = std::env::var(API_URL_ENV)
            && !url.trim().is_empty()
        {
            settings.forge.api_url = url.trim().to_string();
        }
        Ok(settings)
    }

    /// Load settings from a file, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let settings: Self = toml::from_str(&content)
            .map_err(|e| MatsuriError::Config(format!("{}: {e}", path.display())))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| MatsuriError::Config(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the workflow cannot operate with
    pub fn validate(&self) -> Result<()> {
        if !(1..=12).contains(&self.cycle.cutoff_month) {
            return Err(MatsuriError::Config(format!(
                "cycle.cutoff_month must be between 1 and 12, got {}",
                self.cycle.cutoff_month
            )));
        }
        if !(1..=MAX_CARD_PAGE_SIZE).contains(&self.board.card_page_size) {
            return Err(MatsuriError::Config(format!(
                "board.card_page_size must be between 1 and {MAX_CARD_PAGE_SIZE}, got {}",
                self.board.card_page_size
            )));
        }
        if self.forge.owner.trim().is_empty() {
            return Err(MatsuriError::Config("forge.owner must not be empty".into()));
        }
        Ok(())
    }

    /// Read the API token from the configured environment variable
    pub fn token(&self) -> Result<String> {
        let var = &self.forge.token_env;
        match std::env::var(var) {
            Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
            _ => Err(MatsuriError::Config(format!(
                "GitHub token not found. Create one at https://github.com/settings/tokens/new \
                 with 'repo' and 'user:email' permissions and export it as {var}"
            ))),
        }
    }
}
