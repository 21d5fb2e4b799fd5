use crate::{domain::TicketId, store::TicketStore};
use tracing::trace;

/// Handles a ticket form submission
///
/// Empty titles are dropped here rather than in the store. With `trim` set,
/// surrounding whitespace is stripped first, so a whitespace-only title is
/// empty too.
pub fn submit_ticket(store: &mut TicketStore, title: &str, trim: bool) -> Option<TicketId> {
    let title = if trim { title.trim() } else { title };

    if title.is_empty() {
        trace!("ignored empty ticket submission");
        return None;
    }

    Some(store.add_ticket(title))
}
