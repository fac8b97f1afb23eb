//! # tcg-deck-view
//!
//! Client-side deck state and view models for a trading-card-game deck
//! builder covering One Piece TCG and Disney Lorcana.
//!
//! ## Design Principles
//!
//! 1. **One Deck At A Time**: A session holds at most one current deck.
//!    It is replaced wholesale, never edited in place.
//!
//! 2. **Projections Are Pure**: Grouping, statistics, filtering and export
//!    are total functions of the card list. They are recomputed on every
//!    change, never cached.
//!
//! 3. **Profiles Over Branches**: The two games differ only in field sets
//!    and build parameters, described by `GameProfile`.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: The main deck is an `im::Vector`, so
//!   snapshots handed to views and requests are O(1).
//!
//! - **Request Tickets**: Responses that would replace the deck are applied
//!   in request order; late answers to older requests are dropped.
//!
//! - **Transport Seam**: The backend client is generic over `Transport`;
//!   the `http` feature supplies a `reqwest` implementation.
//!
//! ## Modules
//!
//! - `cards`: Card faces and type tags
//! - `deck`: Deck values and the current-deck slot
//! - `projection`: Grouping, statistics, type filter, text export
//! - `games`: Per-game profiles and build-parameter validation
//! - `api`: Envelope decoding, transport, typed backend client
//! - `view`: Display models
//! - `session`: Profile + slot + client, one per builder page
//! - `error`: `DeckError`

pub mod api;
pub mod cards;
pub mod deck;
pub mod error;
pub mod games;
pub mod projection;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use crate::cards::{Card, CardType, Colors};

pub use crate::deck::{CollectionInfo, Deck, DeckSlot, RequestTicket};

pub use crate::error::{DeckError, Result};

pub use crate::games::{BuildParams, BuildRequest, GameKind, GameProfile, Strategy};

pub use crate::projection::{
    compute_stats, export_to_text, filter_by_type, group_by_name,
    CardGroup, CardGroups, DeckStats, ExportFile, ExportStyle, TypeFilter,
};

pub use crate::api::{ApiClient, ClientConfig, Method, Transport};
#[cfg(feature = "http")]
pub use crate::api::HttpTransport;

pub use crate::view::{AnalysisView, CardFace, DeckView};

pub use crate::session::{DeckReport, DeckUpdate, Session};
