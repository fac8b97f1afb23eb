//! Plain-text deck export.
//!
//! Output is deterministic: a header in the game's layout, then one
//! `{count}x {name}` line per distinct name in grouping order.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::group::group_by_name;
use crate::deck::Deck;
use crate::error::{DeckError, Result};

/// MIME type of the export artifact.
pub const EXPORT_MIME: &str = "text/plain";

/// Header layout for exported decks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExportStyle {
    /// Markdown-ish sections with a leader block.
    OnePiece,
    /// Title line with strategy and colors, a rule, and a card total.
    Lorcana,
}

/// A ready-to-download export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime: &'static str,
    pub contents: String,
}

/// Serialize a deck to text.
///
/// Fails with `NoCurrentDeck` when `deck` is `None`.
///
/// ```
/// use tcg_deck_view::cards::{Card, CardType};
/// use tcg_deck_view::deck::Deck;
/// use tcg_deck_view::projection::{export_to_text, ExportStyle};
///
/// let deck = Deck::new("balanced", "Red").with_cards(vec![
///     Card::new("X", CardType::Character, 1),
///     Card::new("X", CardType::Character, 1),
///     Card::new("Y", CardType::Event, 2),
/// ]);
///
/// let text = export_to_text(Some(&deck), ExportStyle::OnePiece).unwrap();
/// assert!(text.ends_with("2x X\n1x Y\n"));
/// ```
pub fn export_to_text(deck: Option<&Deck>, style: ExportStyle) -> Result<String> {
    let deck = deck.ok_or(DeckError::NoCurrentDeck)?;
    let mut out = String::new();

    // Writing to a String cannot fail.
    match style {
        ExportStyle::OnePiece => {
            out.push_str("# One Piece TCG Deck\n\n");
            if let Some(leader) = &deck.leader {
                let _ = write!(out, "## Leader\n{}\n\n", leader.name);
            }
            out.push_str("## Main Deck\n");
        }
        ExportStyle::Lorcana => {
            let _ = writeln!(out, "Disney Lorcana Deck - {} ({})", deck.strategy, deck.color);
            let _ = writeln!(out, "{}\n", "=".repeat(50));
            let _ = writeln!(out, "Main Deck ({} cards):", deck.len());
        }
    }

    for group in &group_by_name(&deck.main_deck) {
        let _ = writeln!(out, "{}x {}", group.count, group.name());
    }

    Ok(out)
}
