//! Card model shared by both games.
//!
//! ## Key Types
//!
//! - `Card`: A card face decoded from the backend
//! - `CardType`: Type tag with a catch-all for unknown tags
//! - `Colors`: Inline list of color tags

pub mod card;
pub mod card_type;

pub use card::{Card, Colors};
pub use card_type::CardType;
