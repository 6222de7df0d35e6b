//! Command implementations

mod kanban;
mod pr;
mod save;
mod setup;
mod start;
mod todo;
mod version;

pub use kanban::kanban;
pub use pr::{fix, pr};
pub use save::save;
pub use setup::setup;
pub use start::start;
pub use todo::todo;
pub use version::version;

use matsuri::adapters::git::GitVersionControl;
use matsuri::adapters::github::GitHubClient;
use matsuri::config::Settings;
use matsuri::core::models::RepoIdentity;
use matsuri::core::ports::VersionControl;
use matsuri::core::services::Session;
use matsuri::output::OutputMode;

/// Capabilities resolved once per run
pub struct Context {
    pub settings: Settings,
    pub forge: GitHubClient,
    pub vcs: GitVersionControl,
    pub repo: Option<RepoIdentity>,
    pub mode: OutputMode,
}

impl Context {
    /// Load settings, detect the repository and build the API client
    ///
    /// Outside a recognized repository only a warning is printed; commands
    /// that need one fail later. A missing token is fatal.
    pub fn load(mode: OutputMode) -> anyhow::Result<Self> {
        let settings = Settings::load()?;
        let vcs = GitVersionControl::current_dir()?;
        let repo = vcs
            .remote_origin_url()
            .and_then(|url| RepoIdentity::from_remote_url(&url, &settings.forge.owner));
        if repo.is_none() {
            log::warn!("You are currently not in a git repository, some subcommands may not run.");
        }
        let forge = GitHubClient::from_settings(&settings)?;
        Ok(Self {
            settings,
            forge,
            vcs,
            repo,
            mode,
        })
    }

    pub fn session(&self) -> Session<'_> {
        Session::new(&self.forge, &self.settings, self.repo.as_ref())
    }

    /// Print a progress line (human mode only)
    pub fn say(&self, message: &str) {
        if self.mode == OutputMode::Human {
            println!("{message}");
        }
    }

    /// Print git output verbatim (human mode only)
    pub fn echo(&self, output: &str) {
        let output = output.trim_end();
        if !output.is_empty() {
            self.say(output);
        }
    }
}
