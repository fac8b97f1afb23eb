//! Deck values and the current-deck slot.
//!
//! - `Deck`: Leader, main deck, strategy and color, as sent by the backend
//! - `DeckSlot`: Single-assignment holder of the current deck
//! - `RequestTicket`: Ordering token for deck-replacing requests

pub mod model;
pub mod slot;

pub use model::{CollectionInfo, Deck};
pub use slot::{DeckSlot, RequestTicket};
