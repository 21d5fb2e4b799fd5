pub mod board;
pub mod column;
pub mod ticket;

pub use board::{Board, TicketLocation, TicketMove};
pub use column::Column;
pub use ticket::{Ticket, TicketId};
