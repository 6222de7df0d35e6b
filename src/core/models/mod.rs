//! Domain models for git-matsuri
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Issue`] - an issue or pull request by number
//! - [`ProjectBoard`], [`Column`] - yearly boards and their lanes
//! - [`Card`] - a board entry and its [`CardKind`]
//! - [`RepoIdentity`] - which repository we are working in

mod board;
mod card;
mod issue;
mod pull_request;
mod repo;

pub use board::{CardPosition, Column, ProjectBoard};
pub use card::{Card, CardKind, ContentEndpoint, ContentRef, NewCard, NewCardContent};
pub use issue::{Issue, IssueState};
pub use pull_request::{NewPullRequest, PullRequest};
pub use repo::{Release, RepoIdentity, Repository, UserEmail};
