//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use super::commands::{self, Context};
use matsuri::output::OutputMode;

/// git-matsuri - git subcommands for Matsuri workflows
#[derive(Parser, Debug)]
#[command(
    name = "git-matsuri",
    version,
    about = "git-matsuri provides useful git subcommands for matsuri workflows",
    long_about = "Work on issues the Matsuri way.\n\n\
                  Issues live on a yearly kanban board. Starting an issue moves its card\n\
                  to \"In progress\" and checks out an ISSUE-<n> branch; opening a pull\n\
                  request files it in \"To do\" and links it to the issue."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start working on an open issue
    Start {
        /// Issue number
        issue: u64,

        /// Board year (defaults to the current cycle)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Save current work on GitHub
    Save {
        /// Issue number
        issue: u64,
    },

    /// Open a pull request for ISSUE
    #[command(long_about = "Open a pull request for ISSUE, mentioning the issue in the body to \
                            link them. Merging closes the issue unless --noclose is given.")]
    Pr {
        /// Issue number
        issue: u64,

        /// Do not close the issue on merge
        #[arg(long)]
        noclose: bool,
    },

    /// Open a new PR to fix a bug in the original one
    #[command(long_about = "Open a new PR to fix the original one, reopening the issue if it \
                            was closed. Add --noclose to override the closing of the issue.")]
    Fix {
        /// Issue number
        issue: u64,

        /// Do not close the issue on merge
        #[arg(long)]
        noclose: bool,
    },

    /// List opened issues
    Todo {
        /// List the issues on this year's board instead of the repository's
        #[arg(short, long)]
        year: Option<i32>,

        /// Board column to list (with --year)
        #[arg(short, long, requires = "year")]
        column: Option<String>,
    },

    /// Show the kanban for a year
    Kanban {
        /// Board year (defaults to the active board)
        year: Option<i32>,
    },

    /// Clone a Matsuri repository
    Setup {
        /// Repository name
        name: String,

        /// Clone over HTTPS instead of SSH
        #[arg(long)]
        http: bool,
    },

    /// Show the version number and check for updates
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let ctx = Context::load(output_mode)?;

    match cli.command {
        Command::Start { issue, year } => commands::start(&ctx, issue, year),
        Command::Save { issue } => commands::save(&ctx, issue),
        Command::Pr { issue, noclose } => commands::pr(&ctx, issue, noclose),
        Command::Fix { issue, noclose } => commands::fix(&ctx, issue, noclose),
        Command::Todo { year, column } => commands::todo(&ctx, year, column.as_deref()),
        Command::Kanban { year } => commands::kanban(&ctx, year),
        Command::Setup { name, http } => commands::setup(&ctx, &name, http),
        Command::Version => commands::version(&ctx),
    }
}
