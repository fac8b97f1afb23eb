//! Game profiles.
//!
//! One Piece TCG and Disney Lorcana differ only in field sets and build
//! parameters. Each is described by a `GameProfile` instead of a separate
//! code path.

pub mod profile;

pub use profile::{BuildParams, BuildRequest, GameKind, GameProfile, Strategy, ANY_COLOR};
