//! Per-game deck-builder session.
//!
//! A `Session` is the application context of one builder page: the game
//! profile, the current-deck slot, and the backend client. Every
//! operation the UI triggers goes through it.
//!
//! ## Ordering
//!
//! Operations take `&self`, so a UI can have a build and a suggestion in
//! flight at once. Deck-replacing requests take a ticket before they are
//! sent. A response is dropped when a later request has already been
//! applied or the deck was replaced locally. See [`crate::deck::DeckSlot`].

pub mod context;

pub use context::{DeckReport, DeckUpdate, Session};
