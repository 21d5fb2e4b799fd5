//! # Kanban Board
//!
//! Ticket store and drag-interaction mapping for a three-column kanban board.
//!
//! Tickets are created in the New column and moved between New, Active and
//! Closed, or reordered within a column. The store hands out immutable board
//! snapshots; the interaction mapper turns a drag gesture's start and end
//! targets into exactly one store move. Rendering and gesture tracking live
//! outside this crate.

pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod interaction;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use config::{BoardConfig, IndexPolicy};
pub use domain::{Board, Column, Ticket, TicketId, TicketLocation, TicketMove};
pub use error::{KanbanError, Result};
pub use form::submit_ticket;
pub use interaction::{DragState, DropTarget, GestureOutcome, InteractionMapper};
pub use session::{BoardEvent, BoardHandle, BoardSession, BoardView};
pub use store::TicketStore;
