//! Backend client.
//!
//! ## Key Types
//!
//! - `Transport`: Sends a JSON body to a path, returns the raw body
//! - `HttpTransport`: `reqwest` implementation (feature `http`)
//! - `ApiClient`: One typed method per backend endpoint
//! - `ClientConfig`: Base URL, timeout, user agent
//!
//! Responses use the `{success, error?, ...payload}` envelope; see
//! [`envelope`] for how it maps to `DeckError`.

pub mod client;
pub mod config;
pub mod envelope;
pub mod transport;
pub mod types;

pub use client::{ApiClient, StructureDeckAdded, DEFAULT_SIMULATIONS};
pub use config::{ClientConfig, ENV_API_TIMEOUT, ENV_API_URL};
pub use envelope::{decode_ack, decode_flat, decode_payload, GENERIC_BACKEND_ERROR};
#[cfg(feature = "http")]
pub use transport::HttpTransport;
pub use transport::{Method, Transport};
pub use types::{
    Analysis, CollectionItem, CombatResults, Improvement, Improvements, KeyCards,
    MatchupDeckStats, OpponentDeck, SaveDeckRequest, StructureDeck, StructureDeckSummary, User,
};
