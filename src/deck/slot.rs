//! The current-deck slot.
//!
//! At most one deck is current. The slot has a single writer path:
//! `set`/`clear` for local replacement and `commit` for backend responses.
//! Readers borrow or snapshot; they never get a mutable reference.
//!
//! ## Request tickets
//!
//! Every request whose response will replace the deck takes a ticket via
//! `issue()`. A response is committed only if no later-issued request has
//! already been committed and no local replacement happened after it was
//! issued. Responses that lose the race are dropped.
//!
//! ```
//! use tcg_deck_view::deck::{Deck, DeckSlot};
//!
//! let mut slot = DeckSlot::new();
//! let build = slot.issue();
//! let suggest = slot.issue();
//!
//! // The newer request resolves first.
//! assert!(slot.commit(suggest, Deck::new("control", "Blue")));
//! // The older one arrives late and is discarded.
//! assert!(!slot.commit(build, Deck::new("aggressive", "Red")));
//!
//! assert_eq!(slot.current().unwrap().strategy, "control");
//! ```

use tracing::{info, warn};

use super::model::Deck;

/// Sequence number handed out when a deck-replacing request is dispatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    /// Get the raw sequence number.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Holder of the current deck.
#[derive(Clone, Debug, Default)]
pub struct DeckSlot {
    current: Option<Deck>,
    /// Bumped on every replacement.
    generation: u64,
    next_ticket: u64,
    /// Tickets below this are stale.
    floor: u64,
}

impl DeckSlot {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current deck.
    ///
    /// Invalidates every ticket issued so far.
    pub fn set(&mut self, deck: Option<Deck>) {
        self.floor = self.next_ticket;
        self.replace(deck);
    }

    /// Drop the current deck (logout, fresh builder view).
    pub fn clear(&mut self) {
        self.set(None);
    }

    /// Borrow the current deck.
    #[must_use]
    pub fn current(&self) -> Option<&Deck> {
        self.current.as_ref()
    }

    /// Owned copy of the current deck. O(1) for the card list.
    #[must_use]
    pub fn snapshot(&self) -> Option<Deck> {
        self.current.clone()
    }

    /// Check whether a deck is set.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.current.is_some()
    }

    /// Replacement counter. Views computed at different generations
    /// describe different decks.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Take a ticket for a request that will replace the deck.
    pub fn issue(&mut self) -> RequestTicket {
        let ticket = RequestTicket(self.next_ticket);
        self.next_ticket += 1;
        ticket
    }

    /// Check whether a ticket can still be committed.
    #[must_use]
    pub fn is_fresh(&self, ticket: RequestTicket) -> bool {
        ticket.0 >= self.floor
    }

    /// Apply a backend response.
    ///
    /// Returns `false` (and leaves the slot untouched) when the ticket is
    /// stale.
    pub fn commit(&mut self, ticket: RequestTicket, deck: Deck) -> bool {
        if !self.is_fresh(ticket) {
            warn!(
                ticket = ticket.0,
                floor = self.floor,
                "discarding stale deck response"
            );
            return false;
        }
        self.floor = ticket.0 + 1;
        self.replace(Some(deck));
        true
    }

    fn replace(&mut self, deck: Option<Deck>) {
        match &deck {
            Some(d) => info!(
                cards = d.len(),
                strategy = %d.strategy,
                color = %d.color,
                "current deck replaced"
            ),
            None => info!("current deck cleared"),
        }
        self.current = deck;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardType};

    fn deck(strategy: &str) -> Deck {
        Deck::new(strategy, "Red").with_cards(vec![Card::new("Nami", CardType::Character, 1)])
    }

    #[test]
    fn test_new_slot_is_empty() {
        let slot = DeckSlot::new();
        assert!(!slot.is_set());
        assert!(slot.current().is_none());
        assert_eq!(slot.generation(), 0);
    }

    #[test]
    fn test_set_replaces_and_bumps_generation() {
        let mut slot = DeckSlot::new();
        slot.set(Some(deck("aggressive")));
        slot.set(Some(deck("control")));

        assert_eq!(slot.current().unwrap().strategy, "control");
        assert_eq!(slot.generation(), 2);
    }

    #[test]
    fn test_clear() {
        let mut slot = DeckSlot::new();
        slot.set(Some(deck("aggressive")));
        slot.clear();

        assert!(!slot.is_set());
        assert_eq!(slot.generation(), 2);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut slot = DeckSlot::new();
        slot.set(Some(deck("aggressive")));

        let snapshot = slot.snapshot().unwrap();
        slot.set(Some(deck("control")));

        assert_eq!(snapshot.strategy, "aggressive");
        assert_eq!(slot.current().unwrap().strategy, "control");
    }

    #[test]
    fn test_in_order_commits_last_write_wins() {
        let mut slot = DeckSlot::new();
        let first = slot.issue();
        let second = slot.issue();

        assert!(slot.commit(first, deck("aggressive")));
        assert!(slot.commit(second, deck("control")));
        assert_eq!(slot.current().unwrap().strategy, "control");
    }

    #[test]
    fn test_out_of_order_commit_is_discarded() {
        let mut slot = DeckSlot::new();
        let first = slot.issue();
        let second = slot.issue();

        assert!(slot.commit(second, deck("control")));
        assert!(!slot.commit(first, deck("aggressive")));
        assert_eq!(slot.current().unwrap().strategy, "control");
        assert_eq!(slot.generation(), 1);
    }

    #[test]
    fn test_local_set_invalidates_in_flight_tickets() {
        let mut slot = DeckSlot::new();
        let pending = slot.issue();

        slot.clear();

        assert!(!slot.is_fresh(pending));
        assert!(!slot.commit(pending, deck("aggressive")));
        assert!(!slot.is_set());
    }

    #[test]
    fn test_tickets_after_local_set_are_fresh() {
        let mut slot = DeckSlot::new();
        slot.clear();
        let ticket = slot.issue();

        assert!(slot.commit(ticket, deck("balanced")));
        assert_eq!(slot.current().unwrap().strategy, "balanced");
    }
}
