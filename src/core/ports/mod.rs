//! Port traits (interfaces) for external dependencies
//!
//! The core depends only on these traits. Implementations live in the
//! `adapters` module; tests substitute in-memory fakes.

mod forge;
mod vcs;

pub use forge::ForgeApi;
pub use vcs::VersionControl;
