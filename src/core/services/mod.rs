//! Business logic services
//!
//! Each service borrows a [`Session`] and reaches the outside world only
//! through its ports.
//!
//! - [`card_locator`] - what a card refers to
//! - [`column_resolver`] - columns by name
//! - [`project_locator`] - yearly boards, and [`cycle`] for the active year
//! - [`card_index`] - cards and issues of a column
//! - [`workflow`] - "to do" to "in progress" transitions
//! - [`pull_request`] - pull request creation and filing
//! - [`issue_validator`] - issue number checks
//! - [`kanban`] - full board view
//! - [`branch`] - topic branch git steps

pub mod branch;
pub mod card_index;
pub mod card_locator;
pub mod column_resolver;
pub mod cycle;
pub mod issue_validator;
pub mod kanban;
pub mod project_locator;
pub mod pull_request;
pub mod release;
mod session;
pub mod workflow;

pub use card_index::{CardIndex, Listing, SkippedCard};
pub use column_resolver::ColumnResolver;
pub use issue_validator::IssueValidator;
pub use kanban::{KanbanColumn, KanbanEntry, kanban_view};
pub use project_locator::ProjectLocator;
pub use pull_request::{FiledPullRequest, PrTemplate, PullRequestComposer, compose, issue_branch};
pub use release::{Version, find_org_email, latest_release_version};
pub use session::Session;
pub use workflow::{MoveOutcome, WorkflowEngine, WorkflowState};
