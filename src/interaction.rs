//! Drag gesture to store mutation mapping.
//!
//! The gesture collaborator reports a start event with the id of the dragged
//! element and an end event with the id of the element it was released over,
//! if any. Columns and tickets share that id namespace: a column's droppable
//! id is its display name, a ticket's is its [`TicketId`].

use crate::{
    domain::{Column, Ticket, TicketId, TicketMove},
    error::Result,
    store::TicketStore,
};
use tracing::{debug, trace};

/// What a drag was released over
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    Column(Column),
    Ticket(TicketId),
}

impl DropTarget {
    /// Classifies a droppable id; column names win over ticket ids
    pub fn parse(over_id: &str) -> Self {
        match over_id.parse::<Column>() {
            Ok(column) => Self::Column(column),
            Err(_) => Self::Ticket(TicketId::from(over_id)),
        }
    }
}

/// Drag state visible to the renderer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No gesture in progress
    #[default]
    Idle,
    /// A ticket is being dragged; kept for the floating preview
    Dragging { ticket: Ticket },
}

/// Result of a finished gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Released over nothing
    Cancelled,
    /// Dragged or target ticket no longer on the board
    Ignored,
    /// The move was applied and produced a new board
    Applied(TicketMove),
    /// The move was issued but the store found nothing to move
    Unchanged(TicketMove),
}

/// Two-phase drag state machine
///
/// The store is passed in on every event; the mapper never keeps a handle to
/// it between gestures.
#[derive(Debug, Default)]
pub struct InteractionMapper {
    state: DragState,
}

impl InteractionMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Ticket currently being dragged, for overlay rendering
    pub fn dragging(&self) -> Option<&Ticket> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging { ticket } => Some(ticket),
        }
    }

    pub fn on_gesture_start(&mut self, store: &TicketStore, active_id: &str) {
        match store.find_ticket(&TicketId::from(active_id)) {
            Some(location) => {
                debug!(ticket_id = active_id, column = %location.column, "drag started");
                self.state = DragState::Dragging {
                    ticket: location.ticket,
                };
            }
            None => trace!(ticket_id = active_id, "drag started on unknown ticket"),
        }
    }

    /// Finishes a gesture, issuing at most one store mutation
    pub fn on_gesture_end(
        &mut self,
        store: &mut TicketStore,
        active_id: &str,
        over_id: Option<&str>,
    ) -> Result<GestureOutcome> {
        self.state = DragState::Idle;

        let Some(over_id) = over_id else {
            debug!(ticket_id = active_id, "drag cancelled");
            return Ok(GestureOutcome::Cancelled);
        };

        let ticket_id = TicketId::from(active_id);
        let mv = match DropTarget::parse(over_id) {
            DropTarget::Column(column) => TicketMove::ToTail { column, ticket_id },
            DropTarget::Ticket(target_id) => {
                // Both positions are read before the move removes anything
                let (Some(dragged), Some(target)) =
                    (store.find_ticket(&ticket_id), store.find_ticket(&target_id))
                else {
                    trace!(ticket_id = active_id, over_id, "drop ignored, ticket not found");
                    return Ok(GestureOutcome::Ignored);
                };

                if dragged.column == target.column {
                    TicketMove::Reorder {
                        column: target.column,
                        old_index: dragged.index,
                        new_index: target.index,
                    }
                } else {
                    TicketMove::ToPosition {
                        column: target.column,
                        ticket_id,
                        index: target.index,
                    }
                }
            }
        };

        if store.move_ticket(mv.clone())? {
            Ok(GestureOutcome::Applied(mv))
        } else {
            Ok(GestureOutcome::Unchanged(mv))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn titles(store: &TicketStore, column: Column) -> Vec<String> {
        store
            .snapshot()
            .column(column)
            .iter()
            .map(|t| t.title.clone())
            .collect()
    }

    /// New=[A], Active=[B, C]
    fn split_board() -> (TicketStore, TicketId, TicketId, TicketId) {
        let mut store = TicketStore::default();
        let a = store.add_ticket("A");
        let b = store.add_ticket("B");
        let c = store.add_ticket("C");
        for id in [&b, &c] {
            store
                .move_ticket(TicketMove::ToTail {
                    column: Column::Active,
                    ticket_id: id.clone(),
                })
                .unwrap();
        }
        (store, a, b, c)
    }

    #[test]
    fn test_drop_target_parse() {
        assert_eq!(DropTarget::parse("Active"), DropTarget::Column(Column::Active));
        assert_eq!(
            DropTarget::parse("0190-abc"),
            DropTarget::Ticket(TicketId::from("0190-abc"))
        );
        assert_eq!(
            DropTarget::parse("active"),
            DropTarget::Ticket(TicketId::from("active"))
        );
    }

    #[test]
    fn test_gesture_start_caches_ticket() {
        let (store, a, _, _) = split_board();
        let mut mapper = InteractionMapper::new();

        mapper.on_gesture_start(&store, a.as_str());

        assert_eq!(mapper.dragging().unwrap().id, a);
    }

    #[test]
    fn test_gesture_start_unknown_stays_idle() {
        let store = TicketStore::default();
        let mut mapper = InteractionMapper::new();

        mapper.on_gesture_start(&store, "missing");

        assert_eq!(mapper.state(), &DragState::Idle);
        assert!(mapper.dragging().is_none());
    }

    #[test]
    fn test_drop_on_nothing_cancels() {
        let (mut store, a, _, _) = split_board();
        let mut mapper = InteractionMapper::new();
        let before = store.snapshot();

        mapper.on_gesture_start(&store, a.as_str());
        let outcome = mapper.on_gesture_end(&mut store, a.as_str(), None).unwrap();

        assert_eq!(outcome, GestureOutcome::Cancelled);
        assert!(mapper.dragging().is_none());
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_drop_on_column_moves_to_tail() {
        let (mut store, a, _, _) = split_board();
        let mut mapper = InteractionMapper::new();

        mapper.on_gesture_start(&store, a.as_str());
        let outcome = mapper
            .on_gesture_end(&mut store, a.as_str(), Some("Active"))
            .unwrap();

        assert_eq!(
            outcome,
            GestureOutcome::Applied(TicketMove::ToTail {
                column: Column::Active,
                ticket_id: a,
            })
        );
        assert!(titles(&store, Column::New).is_empty());
        assert_eq!(titles(&store, Column::Active), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_drop_on_ticket_in_other_column() {
        let (mut store, a, b, _) = split_board();
        let mut mapper = InteractionMapper::new();

        mapper.on_gesture_start(&store, a.as_str());
        let outcome = mapper
            .on_gesture_end(&mut store, a.as_str(), Some(b.as_str()))
            .unwrap();

        assert_eq!(
            outcome,
            GestureOutcome::Applied(TicketMove::ToPosition {
                column: Column::Active,
                ticket_id: a,
                index: 0,
            })
        );
        assert!(titles(&store, Column::New).is_empty());
        assert_eq!(titles(&store, Column::Active), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_drop_on_ticket_in_same_column_reorders() {
        let (mut store, _, b, c) = split_board();
        let mut mapper = InteractionMapper::new();

        mapper.on_gesture_start(&store, c.as_str());
        let outcome = mapper
            .on_gesture_end(&mut store, c.as_str(), Some(b.as_str()))
            .unwrap();

        assert_eq!(
            outcome,
            GestureOutcome::Applied(TicketMove::Reorder {
                column: Column::Active,
                old_index: 1,
                new_index: 0,
            })
        );
        assert_eq!(titles(&store, Column::Active), vec!["C", "B"]);
    }

    #[test]
    fn test_drop_forward_in_same_column_lands_after_target() {
        let mut store = TicketStore::default();
        let a = store.add_ticket("A");
        store.add_ticket("B");
        let c = store.add_ticket("C");
        let mut mapper = InteractionMapper::new();

        mapper.on_gesture_start(&store, a.as_str());
        let outcome = mapper
            .on_gesture_end(&mut store, a.as_str(), Some(c.as_str()))
            .unwrap();

        assert_eq!(
            outcome,
            GestureOutcome::Applied(TicketMove::Reorder {
                column: Column::New,
                old_index: 0,
                new_index: 2,
            })
        );
        assert_eq!(titles(&store, Column::New), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_drop_with_unknown_ticket_is_ignored() {
        let (mut store, a, _, _) = split_board();
        let mut mapper = InteractionMapper::new();
        let before = store.snapshot();

        let outcome = mapper
            .on_gesture_end(&mut store, a.as_str(), Some("gone"))
            .unwrap();
        assert_eq!(outcome, GestureOutcome::Ignored);

        let outcome = mapper
            .on_gesture_end(&mut store, "gone", Some(a.as_str()))
            .unwrap();
        assert_eq!(outcome, GestureOutcome::Ignored);

        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_drop_removed_ticket_on_column_is_unchanged() {
        let (mut store, a, _, _) = split_board();
        let mut mapper = InteractionMapper::new();

        mapper.on_gesture_start(&store, a.as_str());
        store.remove_ticket(&a);
        let before = store.snapshot();

        let outcome = mapper
            .on_gesture_end(&mut store, a.as_str(), Some("Closed"))
            .unwrap();

        assert!(matches!(outcome, GestureOutcome::Unchanged(_)));
        assert!(mapper.dragging().is_none());
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_gestures_are_independent() {
        let (mut store, a, b, _) = split_board();
        let mut mapper = InteractionMapper::new();

        mapper.on_gesture_start(&store, a.as_str());
        mapper.on_gesture_end(&mut store, a.as_str(), None).unwrap();

        // A second gesture without a start still maps from its own ids
        let outcome = mapper
            .on_gesture_end(&mut store, b.as_str(), Some("Closed"))
            .unwrap();

        assert!(matches!(outcome, GestureOutcome::Applied(_)));
        assert_eq!(titles(&store, Column::Closed), vec!["B"]);
    }
}
