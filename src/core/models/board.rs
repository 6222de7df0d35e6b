//! Project board and column models

use serde::{Deserialize, Serialize};

/// A yearly kanban board, e.g. "Matsuri 2024"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectBoard {
    /// Platform-assigned identifier; lower means older
    pub id: u64,
    /// Board name
    pub name: String,
}

/// A named lane of a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Platform-assigned identifier
    pub id: u64,
    /// Column name, unique within its board
    pub name: String,
}

/// Where a moved card lands in its target column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardPosition {
    /// First position
    #[default]
    Top,
    /// Last position
    Bottom,
}

impl CardPosition {
    /// Wire value understood by the platform
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}
