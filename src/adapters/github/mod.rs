//! GitHub REST adapter
//!
//! Implements `ForgeApi` with a blocking `reqwest` client. Classic project
//! boards need the `inertia` preview media type. Listings request a single
//! page of a fixed size.

mod types;

use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::Settings;
use crate::core::models::{
    Card, CardPosition, Column, Issue, IssueState, NewCard, NewPullRequest, ProjectBoard,
    PullRequest, Release, RepoIdentity, Repository, UserEmail,
};
use crate::core::ports::ForgeApi;
use crate::error::{MatsuriError, Result};

use types::{EditIssueRequest, ErrorResponse, IssueResponse, MoveCardRequest};

const PREVIEW_MEDIA_TYPE: &str = "application/vnd.github.inertia-preview+json";

/// Page size for issue and board listings
const LIST_PAGE_SIZE: usize = 100;

/// Blocking GitHub API client
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: String,
    token: String,
}

impl GitHubClient {
    /// Create a client for `base_url` authenticating with `token`
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(PREVIEW_MEDIA_TYPE));
        let http = Client::builder()
            .user_agent(concat!("git-matsuri/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Create a client from loaded settings and the token environment variable
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(&settings.forge.api_url, &settings.token()?)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{path}", self.base_url)).bearer_auth(&self.token)
    }

    fn execute<T: DeserializeOwned>(method: &Method, path: &str, req: RequestBuilder) -> Result<T> {
        log::debug!("{method} {path}");
        let response = req.send()?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.message)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("request failed").to_string());
            return Err(MatsuriError::Api {
                method: method.to_string(),
                path: path.to_string(),
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json()?)
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        Self::execute(&Method::GET, path, self.request(Method::GET, path))
    }

    fn send<B: Serialize, T: DeserializeOwned>(&self, method: &Method, path: &str, body: &B) -> Result<T> {
        let req = self.request(method.clone(), path).json(body);
        Self::execute(method, path, req)
    }
}

impl ForgeApi for GitHubClient {
    fn get_issue(&self, repo: &RepoIdentity, number: u64) -> Result<Issue> {
        let path = format!("/repos/{}/{}/issues/{number}", repo.owner, repo.name);
        match self.get::<IssueResponse>(&path) {
            Ok(issue) => Ok(issue.into_issue(&repo.name)),
            Err(MatsuriError::Api { status: 404 | 410, .. }) => Err(MatsuriError::IssueNotFound {
                number,
                repo: repo.full_name(),
            }),
            Err(e) => Err(e),
        }
    }

    fn list_repo_issues(&self, repo: &RepoIdentity) -> Result<Vec<Issue>> {
        let path = format!("/repos/{}/{}/issues?per_page={LIST_PAGE_SIZE}", repo.owner, repo.name);
        let issues: Vec<IssueResponse> = self.get(&path)?;
        Ok(issues.into_iter().map(|i| i.into_issue(&repo.name)).collect())
    }

    fn list_org_projects(&self, owner: &str) -> Result<Vec<ProjectBoard>> {
        self.get(&format!("/orgs/{owner}/projects?per_page={LIST_PAGE_SIZE}"))
    }

    fn list_repo_projects(&self, repo: &RepoIdentity) -> Result<Vec<ProjectBoard>> {
        self.get(&format!("/repos/{}/{}/projects?per_page={LIST_PAGE_SIZE}", repo.owner, repo.name))
    }

    fn list_columns(&self, board: &ProjectBoard) -> Result<Vec<Column>> {
        self.get(&format!("/projects/{}/columns?per_page={LIST_PAGE_SIZE}", board.id))
    }

    fn list_cards(&self, column: &Column, per_page: usize) -> Result<Vec<Card>> {
        self.get(&format!("/projects/columns/{}/cards?per_page={per_page}", column.id))
    }

    fn move_card(&self, card: &Card, column: &Column, position: CardPosition) -> Result<()> {
        let path = format!("/projects/columns/cards/{}/moves", card.id);
        let body = MoveCardRequest {
            position: position.as_str(),
            column_id: column.id,
        };
        self.send::<_, serde_json::Value>(&Method::POST, &path, &body).map(|_| ())
    }

    fn create_card(&self, column: &Column, card: NewCard) -> Result<Card> {
        self.send(&Method::POST, &format!("/projects/columns/{}/cards", column.id), &card)
    }

    fn create_pull_request(&self, repo: &RepoIdentity, pr: &NewPullRequest) -> Result<PullRequest> {
        self.send(&Method::POST, &format!("/repos/{}/{}/pulls", repo.owner, repo.name), pr)
    }

    fn edit_issue_state(&self, repo: &RepoIdentity, number: u64, state: IssueState) -> Result<Issue> {
        let path = format!("/repos/{}/{}/issues/{number}", repo.owner, repo.name);
        let issue: IssueResponse = self.send(&Method::PATCH, &path, &EditIssueRequest { state })?;
        Ok(issue.into_issue(&repo.name))
    }

    fn list_user_emails(&self) -> Result<Vec<UserEmail>> {
        self.get("/user/emails")
    }

    fn get_repository(&self, repo: &RepoIdentity) -> Result<Repository> {
        self.get(&format!("/repos/{}/{}", repo.owner, repo.name))
    }

    fn latest_release(&self, repo: &RepoIdentity) -> Result<Release> {
        self.get(&format!("/repos/{}/{}/releases/latest", repo.owner, repo.name))
    }
}
