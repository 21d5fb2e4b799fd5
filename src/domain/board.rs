use crate::{
    config::IndexPolicy,
    domain::{column::Column, ticket::Ticket, ticket::TicketId},
    error::{KanbanError, Result},
};
use serde::{Deserialize, Serialize};

/// Where a ticket currently sits on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketLocation {
    pub column: Column,
    pub ticket: Ticket,
    pub index: usize,
}

/// A positional move, one variant per drag semantic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketMove {
    /// Append the ticket to the end of `column`, wherever it currently is
    ToTail { column: Column, ticket_id: TicketId },
    /// Insert the ticket at `index` within `column`, wherever it currently is
    ToPosition {
        column: Column,
        ticket_id: TicketId,
        index: usize,
    },
    /// Move the ticket at `old_index` to `new_index` inside `column`
    Reorder {
        column: Column,
        old_index: usize,
        new_index: usize,
    },
}

/// Board snapshot: the ordered tickets of every column
///
/// A `Board` is a plain value. The store never edits a board that has been
/// handed out; it clones, edits the clone, and publishes the clone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(rename = "New")]
    new: Vec<Ticket>,
    #[serde(rename = "Active")]
    active: Vec<Ticket>,
    #[serde(rename = "Closed")]
    closed: Vec<Ticket>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tickets of a column in display order
    pub fn column(&self, column: Column) -> &[Ticket] {
        match column {
            Column::New => &self.new,
            Column::Active => &self.active,
            Column::Closed => &self.closed,
        }
    }

    fn column_mut(&mut self, column: Column) -> &mut Vec<Ticket> {
        match column {
            Column::New => &mut self.new,
            Column::Active => &mut self.active,
            Column::Closed => &mut self.closed,
        }
    }

    /// Iterates columns in declared order
    pub fn columns(&self) -> impl Iterator<Item = (Column, &[Ticket])> {
        Column::ALL.into_iter().map(move |c| (c, self.column(c)))
    }

    /// Total number of tickets across all columns
    pub fn len(&self) -> usize {
        self.new.len() + self.active.len() + self.closed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finds a ticket, searching columns in declared order
    pub fn find_ticket(&self, ticket_id: &TicketId) -> Option<TicketLocation> {
        self.columns().find_map(|(column, tickets)| {
            tickets
                .iter()
                .position(|t| &t.id == ticket_id)
                .map(|index| TicketLocation {
                    column,
                    ticket: tickets[index].clone(),
                    index,
                })
        })
    }

    /// Looks up a ticket by id, failing if it is not on the board
    pub fn ticket(&self, ticket_id: &TicketId) -> Result<&Ticket> {
        self.columns()
            .flat_map(|(_, tickets)| tickets.iter())
            .find(|t| &t.id == ticket_id)
            .ok_or_else(|| KanbanError::TicketNotFound(ticket_id.to_string()))
    }

    pub(crate) fn push(&mut self, column: Column, ticket: Ticket) {
        self.column_mut(column).push(ticket);
    }

    /// Detaches a ticket from whichever column holds it
    pub(crate) fn take(&mut self, ticket_id: &TicketId) -> Option<(Column, Ticket)> {
        let location = self.find_ticket(ticket_id)?;
        let ticket = self.column_mut(location.column).remove(location.index);
        Some((location.column, ticket))
    }

    /// Detaches the ticket at `index` in `column`
    ///
    /// Returns `Ok(None)` for an out-of-range index under the clamping
    /// policy so the caller never inserts a ticket that was not there.
    pub(crate) fn take_at(
        &mut self,
        column: Column,
        index: usize,
        policy: IndexPolicy,
    ) -> Result<Option<Ticket>> {
        let tickets = self.column_mut(column);
        if index < tickets.len() {
            return Ok(Some(tickets.remove(index)));
        }
        match policy {
            IndexPolicy::Clamp => Ok(None),
            IndexPolicy::Reject => Err(out_of_range(column, index, tickets.len())),
        }
    }

    /// Inserts a ticket at `index` in `column`
    pub(crate) fn insert_at(
        &mut self,
        column: Column,
        index: usize,
        ticket: Ticket,
        policy: IndexPolicy,
    ) -> Result<()> {
        let tickets = self.column_mut(column);
        let len = tickets.len();
        let index = match policy {
            IndexPolicy::Clamp => index.min(len),
            IndexPolicy::Reject if index > len => return Err(out_of_range(column, index, len)),
            IndexPolicy::Reject => index,
        };
        tickets.insert(index, ticket);
        Ok(())
    }
}

fn out_of_range(column: Column, index: usize, len: usize) -> KanbanError {
    KanbanError::IndexOutOfRange {
        column: column.to_string(),
        index,
        len,
    }
}
