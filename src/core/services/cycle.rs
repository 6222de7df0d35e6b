//! Yearly cycle policy
//!
//! The active cycle year comes from the default branch name (`v2024...`).
//! When the branch carries no year, the calendar year is used, bumped by one
//! once the month is past the configured cutoff.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

static BRANCH_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v(\d+)").expect("branch year pattern is valid"));

/// Year token at the start of a branch name, if any
#[must_use]
pub fn year_from_branch(branch: &str) -> Option<i32> {
    BRANCH_YEAR.captures(branch.trim()).and_then(|c| c[1].parse().ok())
}

/// Calendar fallback for the cycle year
#[must_use]
pub fn calendar_cycle_year(today: NaiveDate, cutoff_month: u32) -> i32 {
    if today.month() > cutoff_month {
        today.year() + 1
    } else {
        today.year()
    }
}

/// The cycle year for a repository whose default branch is `default_branch`
#[must_use]
pub fn cycle_year(default_branch: &str, today: NaiveDate, cutoff_month: u32) -> i32 {
    year_from_branch(default_branch).unwrap_or_else(|| calendar_cycle_year(today, cutoff_month))
}
