use crate::{
    config::{BoardConfig, IndexPolicy},
    domain::{Board, Column, Ticket, TicketId, TicketLocation, TicketMove},
    error::{KanbanError, Result},
};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Owner of the authoritative board
///
/// Every mutation clones the current board, edits the clone, and swaps it in
/// as a single step. Snapshots handed out earlier keep their contents.
#[derive(Debug, Clone, Default)]
pub struct TicketStore {
    board: Arc<Board>,
    index_policy: IndexPolicy,
}

impl TicketStore {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            board: Arc::new(Board::new()),
            index_policy: config.index_policy,
        }
    }

    /// Current board snapshot
    pub fn snapshot(&self) -> Arc<Board> {
        Arc::clone(&self.board)
    }

    pub fn ticket_count(&self) -> usize {
        self.board.len()
    }

    /// Creates a ticket and appends it to the New column
    ///
    /// The title is stored as given; emptiness is the caller's concern.
    pub fn add_ticket(&mut self, title: impl Into<String>) -> TicketId {
        let ticket = Ticket::new(title);
        let id = ticket.id.clone();

        let mut next = Board::clone(&self.board);
        next.push(Column::New, ticket);
        self.board = Arc::new(next);

        debug!(ticket_id = %id, "added ticket");
        id
    }

    pub fn find_ticket(&self, ticket_id: &TicketId) -> Option<TicketLocation> {
        self.board.find_ticket(ticket_id)
    }

    pub fn get(&self, ticket_id: &TicketId) -> Result<&Ticket> {
        self.board.ticket(ticket_id)
    }

    /// Applies a positional move
    ///
    /// Returns `Ok(false)` when the ticket or source slot does not exist; the
    /// board is left untouched in that case. Index errors only surface under
    /// [`IndexPolicy::Reject`].
    pub fn move_ticket(&mut self, mv: TicketMove) -> Result<bool> {
        let mut next = Board::clone(&self.board);
        let policy = self.index_policy;

        let moved = match &mv {
            TicketMove::ToTail { column, ticket_id } => match next.take(ticket_id) {
                Some((_, ticket)) => {
                    next.push(*column, ticket);
                    true
                }
                None => false,
            },
            TicketMove::ToPosition {
                column,
                ticket_id,
                index,
            } => match next.take(ticket_id) {
                Some((_, ticket)) => {
                    next.insert_at(*column, *index, ticket, policy).map_err(rejected)?;
                    true
                }
                None => false,
            },
            TicketMove::Reorder {
                column,
                old_index,
                new_index,
            } => match next.take_at(*column, *old_index, policy).map_err(rejected)? {
                Some(ticket) => {
                    next.insert_at(*column, *new_index, ticket, policy).map_err(rejected)?;
                    true
                }
                None => false,
            },
        };

        if !moved {
            trace!(?mv, "move target not found, board unchanged");
            return Ok(false);
        }

        self.board = Arc::new(next);
        debug!(?mv, "moved ticket");
        Ok(true)
    }

    /// Deletes a ticket from whichever column holds it
    pub fn remove_ticket(&mut self, ticket_id: &TicketId) -> bool {
        let mut next = Board::clone(&self.board);
        if next.take(ticket_id).is_none() {
            trace!(ticket_id = %ticket_id, "remove target not found, board unchanged");
            return false;
        }

        self.board = Arc::new(next);
        debug!(ticket_id = %ticket_id, "removed ticket");
        true
    }
}

fn rejected(err: KanbanError) -> KanbanError {
    warn!(%err, "rejected move");
    err
}
