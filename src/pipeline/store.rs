//! In-memory ticket store
//!
//! One owned, ordered list of tickets behind a single mutation entry point.
//! Tickets live for the session only; there is no persistence.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::types::Ticket;

/// Shared handle to the session's ticket store.
pub type SharedTicketStore = Arc<RwLock<TicketStore>>;

/// The session's ticket list, newest first.
///
/// All mutation flows through [`TicketStore::update`], which replaces the
/// matching record by id. Ids are allocated as max(existing) + 1, so they
/// stay unique within a session even after hypothetical removals.
#[derive(Debug, Default)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
}

impl TicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given ticket texts, preserving
    /// their order (first text becomes ticket 1, shown last).
    pub fn with_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = Self::new();
        for text in texts {
            store.insert(text);
        }
        store
    }

    /// Wrap a store for sharing across the async runtime.
    pub fn into_shared(self) -> SharedTicketStore {
        Arc::new(RwLock::new(self))
    }

    /// Insert a new uploaded ticket at the front of the list (newest first)
    /// and return a clone of it.
    pub fn insert(&mut self, text: impl Into<String>) -> Ticket {
        let id = self.next_id();
        let ticket = Ticket::new(id, text);
        debug!(ticket_id = id, "Ticket inserted");
        self.tickets.insert(0, ticket.clone());
        ticket
    }

    /// Next ticket id: max(existing) + 1, or 1 for an empty store.
    fn next_id(&self) -> u64 {
        self.tickets.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    /// Get a clone of the ticket with the given id.
    pub fn get(&self, id: u64) -> Option<Ticket> {
        self.tickets.iter().find(|t| t.id == id).cloned()
    }

    /// Snapshot of the full list in display order (newest first).
    pub fn list(&self) -> Vec<Ticket> {
        self.tickets.clone()
    }

    /// Ids of tickets that have not been through a complete run yet.
    pub fn untriaged_ids(&self) -> Vec<u64> {
        self.tickets
            .iter()
            .filter(|t| !t.is_triaged())
            .map(|t| t.id)
            .collect()
    }

    /// Single mutation entry point: apply `f` to the ticket with the given
    /// id. Returns false (and mutates nothing) when the id is unknown.
    pub fn update<F>(&mut self, id: u64, f: F) -> bool
    where
        F: FnOnce(&mut Ticket),
    {
        match self.tickets.iter_mut().find(|t| t.id == id) {
            Some(ticket) => {
                f(ticket);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TicketStage;

    #[test]
    fn test_insert_allocates_sequential_ids() {
        let mut store = TicketStore::new();
        assert_eq!(store.insert("first").id, 1);
        assert_eq!(store.insert("second").id, 2);
        assert_eq!(store.insert("third").id, 3);
    }

    #[test]
    fn test_insert_is_newest_first() {
        let mut store = TicketStore::new();
        store.insert("first");
        store.insert("second");
        let list = store.list();
        assert_eq!(list[0].text, "second");
        assert_eq!(list[1].text, "first");
    }

    #[test]
    fn test_id_allocation_is_max_plus_one() {
        let mut store = TicketStore::with_texts(["a", "b", "c"]);
        // Ids 1..=3 exist; next insert gets 4 regardless of list order.
        assert_eq!(store.insert("d").id, 4);
    }

    #[test]
    fn test_update_hits_only_matching_id() {
        let mut store = TicketStore::with_texts(["a", "b"]);
        let updated = store.update(1, |t| t.stage = TicketStage::Summarized);
        assert!(updated);
        assert_eq!(store.get(1).unwrap().stage, TicketStage::Summarized);
        assert_eq!(store.get(2).unwrap().stage, TicketStage::Uploaded);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = TicketStore::with_texts(["a"]);
        assert!(!store.update(99, |t| t.stage = TicketStage::Routed));
        assert_eq!(store.get(1).unwrap().stage, TicketStage::Uploaded);
    }

    #[test]
    fn test_untriaged_ids_skips_completed() {
        let mut store = TicketStore::with_texts(["a", "b"]);
        store.update(1, |t| {
            t.summary = Some("📝 a".to_string());
            t.action = Some("📥 NORMAL QUEUE".to_string());
        });
        assert_eq!(store.untriaged_ids(), vec![2]);
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let store = TicketStore::new();
        assert!(store.get(1).is_none());
    }
}
