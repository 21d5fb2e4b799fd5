use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque ticket identifier
///
/// Freshly generated ids are UUIDv7, so they sort lexically in creation order.
/// Ids coming back from the gesture layer are plain strings and are wrapped
/// as-is for lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    /// Generates a new time-sortable id
    pub fn generate() -> Self {
        Self(Uuid::now_v7().hyphenated().to_string())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TicketId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TicketId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A kanban ticket
///
/// Tickets are never edited after creation; only their position on the
/// board changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    /// Creates a new ticket with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TicketId::generate(),
            title: title.into(),
            created_at: Utc::now(),
        }
    }
}
