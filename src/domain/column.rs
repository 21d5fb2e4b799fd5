use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Status column of the kanban board
///
/// The display names double as the droppable element ids reported by the
/// gesture collaborator, so parsing is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    New,
    Active,
    Closed,
}

impl Column {
    /// All columns in their fixed declared order
    pub const ALL: [Column; 3] = [Column::New, Column::Active, Column::Closed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Active => "Active",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Column {
    type Err = crate::error::KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(Self::New),
            "Active" => Ok(Self::Active),
            "Closed" => Ok(Self::Closed),
            _ => Err(crate::error::KanbanError::InvalidColumn(s.to_string())),
        }
    }
}
