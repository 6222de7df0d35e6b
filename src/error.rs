//! Error types for git-matsuri
//!
//! Every error names the board, column or issue involved so the user can
//! tell why an operation failed. Errors map to a coarse [`ErrorKind`], a
//! stable string code and a process exit code.

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, MatsuriError>;

/// Coarse error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Board, column, card or issue absent
    NotFound,
    /// Input rejected before any mutating call
    Validation,
    /// Pull request created but not filed on the board
    PartialSuccess,
    /// A git subprocess exited non-zero
    ExternalTool,
    /// The hosting API rejected a request or could not be reached
    Api,
    /// Local configuration or environment problem
    Config,
}

/// Main error type for all git-matsuri operations
#[derive(Debug, Error)]
pub enum MatsuriError {
    /// No project board with the expected name
    #[error("project {name} was not found")]
    ProjectNotFound {
        /// Board name that was searched for
        name: String,
    },

    /// The board has no column with the given name
    #[error("there is no {column} column for {board}")]
    ColumnNotFound {
        /// Board name
        board: String,
        /// Column name
        column: String,
    },

    /// The issue has no card in either tracked column
    #[error("issue #{issue} is not in {board}'s {todo} or {in_progress} columns")]
    CardNotOnBoard {
        /// Issue number
        issue: u64,
        /// Board name
        board: String,
        /// Name of the "to do" column
        todo: String,
        /// Name of the "in progress" column
        in_progress: String,
    },

    /// The board or one of its tracked columns could not be resolved
    #[error("board for {year} is unavailable: {source}")]
    BoardUnavailable {
        /// Cycle year
        year: i32,
        /// Underlying lookup failure
        #[source]
        source: Box<MatsuriError>,
    },

    /// The numbered issue does not exist or is not visible
    #[error("issue #{number} was not found in {repo}")]
    IssueNotFound {
        /// Issue number
        number: u64,
        /// Repository full name
        repo: String,
    },

    /// A card's content reference does not have the issues-URL shape
    #[error("could not extract an issue number from {reference:?}")]
    Extraction {
        /// Offending content reference
        reference: String,
    },

    /// Input rejected before any mutation
    #[error("{0}")]
    Validation(String),

    /// Pull request created but filing it on the board failed
    #[error("pull request {url} was created but could not be filed on the board: {source}")]
    PartialSuccess {
        /// URL of the created pull request
        url: String,
        /// Filing failure
        #[source]
        source: Box<MatsuriError>,
    },

    /// A git subprocess failed; output is kept verbatim
    #[error("`{command}` failed:\n{output}")]
    ExternalTool {
        /// Command line that was run
        command: String,
        /// Combined stdout/stderr
        output: String,
    },

    /// The current directory is not a recognized organization repository
    #[error("not inside a recognized {owner} repository")]
    NotInRepository {
        /// Organization the remote URL was matched against
        owner: String,
    },

    /// The hosting API answered with a non-success status
    #[error("API request {method} {path} failed with status {status}: {message}")]
    Api {
        /// HTTP method
        method: String,
        /// Request path
        path: String,
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MatsuriError {
    /// Get the category of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ProjectNotFound { .. }
            | Self::ColumnNotFound { .. }
            | Self::CardNotOnBoard { .. }
            | Self::BoardUnavailable { .. }
            | Self::IssueNotFound { .. } => ErrorKind::NotFound,
            Self::Extraction { .. } | Self::Validation(_) => ErrorKind::Validation,
            Self::PartialSuccess { .. } => ErrorKind::PartialSuccess,
            Self::ExternalTool { .. } => ErrorKind::ExternalTool,
            Self::Api { .. } | Self::Http(_) => ErrorKind::Api,
            Self::NotInRepository { .. } | Self::Config(_) | Self::Io(_) => ErrorKind::Config,
        }
    }

    /// Get the stable error code string
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ProjectNotFound { .. } => "PROJECT_NOT_FOUND",
            Self::ColumnNotFound { .. } => "COLUMN_NOT_FOUND",
            Self::CardNotOnBoard { .. } => "CARD_NOT_ON_BOARD",
            Self::BoardUnavailable { .. } => "BOARD_UNAVAILABLE",
            Self::IssueNotFound { .. } => "ISSUE_NOT_FOUND",
            Self::Extraction { .. } => "EXTRACTION_ERROR",
            Self::Validation(_) => "VALIDATION_FAILURE",
            Self::PartialSuccess { .. } => "PARTIAL_SUCCESS",
            Self::ExternalTool { .. } => "EXTERNAL_TOOL_FAILURE",
            Self::NotInRepository { .. } => "NOT_IN_REPOSITORY",
            Self::Api { .. } => "API_ERROR",
            Self::Http(_) => "HTTP_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }

    /// Process exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Validation => 2,
            ErrorKind::PartialSuccess => 3,
            _ => 1,
        }
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Exit code for an error reaching the binary's top level
#[must_use]
pub fn to_exit_code(error: &anyhow::Error) -> i32 {
    error.downcast_ref::<MatsuriError>().map_or(1, MatsuriError::exit_code)
}
