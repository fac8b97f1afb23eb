//! Deck view-model projector.
//!
//! Stateless, total functions from card sequences to derived views.
//! Nothing here is cached: callers re-run the projections after every
//! deck replacement.
//!
//! - `group_by_name`: Distinct names with counts, first-seen face
//! - `compute_stats`: Totals, average cost, type/color distributions
//! - `filter_by_type`: Type filter with `"all"` passthrough
//! - `export_to_text`: Plain-text deck list

pub mod export;
pub mod filter;
pub mod group;
pub mod stats;

pub use export::{export_to_text, ExportFile, ExportStyle, EXPORT_MIME};
pub use filter::{filter_by_type, TypeFilter};
pub use group::{group_by_name, CardGroup, CardGroups};
pub use stats::{compute_stats, ColorCount, DeckStats, TypeShare};
