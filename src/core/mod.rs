//! Core domain logic for git-matsuri
//!
//! All external interactions go through the port traits; nothing in here
//! performs I/O directly.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Issue, ProjectBoard, Column, Card)
//! - `services/` - Board lookups, transitions and pull request filing
//! - `ports/` - Trait definitions for the forge API and local git

pub mod models;
pub mod ports;
pub mod services;
