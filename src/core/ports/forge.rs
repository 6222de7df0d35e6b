//! Hosting-platform port
//!
//! Every call the workflow needs from the forge's REST API. Implementations
//! are stateless apart from their connection settings; nothing is cached.

use crate::core::models::{
    Card, CardPosition, Column, Issue, IssueState, NewCard, NewPullRequest, ProjectBoard,
    PullRequest, Release, RepoIdentity, Repository, UserEmail,
};
use crate::error::Result;

/// Hosting-platform capability
///
/// Calls block until the platform answers. The tool is single-threaded, so
/// the trait carries no `Send`/`Sync` bound.
pub trait ForgeApi {
    /// Get an issue (or pull request) by number
    fn get_issue(&self, repo: &RepoIdentity, number: u64) -> Result<Issue>;

    /// List the issues of a repository (first page)
    fn list_repo_issues(&self, repo: &RepoIdentity) -> Result<Vec<Issue>>;

    /// List the project boards of an organization
    fn list_org_projects(&self, owner: &str) -> Result<Vec<ProjectBoard>>;

    /// List the project boards of a repository
    fn list_repo_projects(&self, repo: &RepoIdentity) -> Result<Vec<ProjectBoard>>;

    /// List the columns of a board, in board order
    fn list_columns(&self, board: &ProjectBoard) -> Result<Vec<Column>>;

    /// List one page of a column's cards, in column order
    fn list_cards(&self, column: &Column, per_page: usize) -> Result<Vec<Card>>;

    /// Move a card into a column
    fn move_card(&self, card: &Card, column: &Column, position: CardPosition) -> Result<()>;

    /// Create a card in a column
    fn create_card(&self, column: &Column, card: NewCard) -> Result<Card>;

    /// Open a pull request
    fn create_pull_request(&self, repo: &RepoIdentity, pr: &NewPullRequest) -> Result<PullRequest>;

    /// Change an issue's state
    fn edit_issue_state(&self, repo: &RepoIdentity, number: u64, state: IssueState) -> Result<Issue>;

    /// List the authenticated user's email addresses
    fn list_user_emails(&self) -> Result<Vec<UserEmail>>;

    /// Get repository metadata, including the default branch
    fn get_repository(&self, repo: &RepoIdentity) -> Result<Repository>;

    /// Get the latest published release of a repository
    fn latest_release(&self, repo: &RepoIdentity) -> Result<Release>;
}
