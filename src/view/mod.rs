//! View models.
//!
//! Plain data for a renderer. Built from projections and backend
//! responses; holds no references to the session.
//!
//! ## Key Types
//!
//! - `CardFace`: One card row with its count
//! - `DeckView`: The deck panel (leader, stats, filtered rows)
//! - `AnalysisView`: Cost curve and distributions with percentages

pub mod analysis;
pub mod deck_view;
pub mod face;

pub use analysis::{AnalysisView, CurveBar, ShareRow};
pub use deck_view::DeckView;
pub use face::CardFace;
