//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `github/` - REST client for the hosting platform
//! - `git/` - local git subprocess calls

pub mod git;
pub mod github;
