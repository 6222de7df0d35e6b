//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::Issue;
use crate::core::services::{KanbanColumn, SkippedCard};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A list of issues
#[derive(Debug, Serialize)]
pub struct IssueListResult {
    /// Where the issues came from, e.g. a column name
    pub source: String,
    /// Issues, in listing order
    pub issues: Vec<Issue>,
    /// Cards that could not be resolved
    pub skipped: Vec<SkippedCard>,
}

/// A rendered board
#[derive(Debug, Serialize)]
pub struct KanbanResult {
    /// Board name
    pub board: String,
    /// Columns in board order
    pub columns: Vec<KanbanColumn>,
}

/// A created pull request and whether it landed on the board
#[derive(Debug, Serialize)]
pub struct PullRequestResult {
    /// Pull request number
    pub number: u64,
    /// Browser URL
    pub url: String,
    /// Card created for it, if filing succeeded
    pub card_id: Option<u64>,
    /// Filing failure, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filing_error: Option<String>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

impl IssueListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.issues.is_empty() {
            println!("No issues in {}.", self.source);
        }
        for issue in &self.issues {
            println!("{} [{}]: {}", issue.number, issue.repository, issue.title);
        }
        if !self.skipped.is_empty() {
            println!("({} card(s) could not be resolved)", self.skipped.len());
        }
    }
}

impl KanbanResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("{}\n", self.board.bold());
        for column in &self.columns {
            println!("{}", column.name.bold());
            for entry in &column.cards.items {
                let marker = if entry.is_pull_request { " (PR)" } else { "" };
                println!("{} [{}]: {}{marker}", entry.number, entry.repository, entry.title);
            }
            if !column.cards.skipped.is_empty() {
                println!("({} card(s) could not be resolved)", column.cards.skipped.len());
            }
            println!();
        }
    }
}

impl PullRequestResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Pull Request created: {}", self.url);
                if let Some(err) = &self.filing_error {
                    println!("{} {err}", "Not filed on the board:".yellow());
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
