use thiserror::Error;

pub type Result<T> = std::result::Result<T, KanbanError>;

#[derive(Debug, Error)]
pub enum KanbanError {
    #[error("Ticket not found: {0}")]
    TicketNotFound(String),

    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    #[error("Index {index} out of range for column {column} (len {len})")]
    IndexOutOfRange {
        column: String,
        index: usize,
        len: usize,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Board session is no longer running")]
    SessionClosed,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
