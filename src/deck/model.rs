//! Deck values.
//!
//! A `Deck` is created from a backend response (build, suggest, load,
//! adopt-improvement) and replaced wholesale, never edited in place.
//! `main_deck` uses a persistent vector so snapshots handed to readers
//! are O(1) clones.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

fn default_strategy() -> String {
    "balanced".to_string()
}

fn default_color() -> String {
    "any".to_string()
}

/// How much of a deck the user already owns.
///
/// Returned as `collection_info` by suggest-from-collection and as
/// `collection_coverage` on improvement suggestions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owned_cards: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cards: Option<u32>,

    /// Percentage of the deck owned, 0-100.
    #[serde(default, alias = "percentage")]
    pub percentage_owned: f64,

    /// Card names still missing from the collection.
    #[serde(default)]
    pub needed_cards: Vec<String>,
}

/// A deck as exchanged with the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Server id, present on saved decks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// User-given name, present on saved decks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Leader card. Always present for One Piece, never for Lorcana.
    #[serde(default)]
    pub leader: Option<Card>,

    /// Played cards, in backend order. Duplicates allowed.
    #[serde(default)]
    pub main_deck: Vector<Card>,

    /// Archetype tag (aggressive, balanced, control).
    #[serde(default = "default_strategy")]
    pub strategy: String,

    /// Primary color identity.
    #[serde(default = "default_color")]
    pub color: String,

    /// Game tag on saved decks (`"lorcana"` or absent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_info: Option<CollectionInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_coverage: Option<CollectionInfo>,
}

impl Deck {
    /// Create an empty deck with the given strategy and color.
    #[must_use]
    pub fn new(strategy: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: None,
            name: None,
            leader: None,
            main_deck: Vector::new(),
            strategy: strategy.into(),
            color: color.into(),
            game: None,
            collection_info: None,
            collection_coverage: None,
        }
    }

    /// Set the leader (builder pattern).
    #[must_use]
    pub fn with_leader(mut self, leader: Card) -> Self {
        self.leader = Some(leader);
        self
    }

    /// Replace the main deck (builder pattern).
    #[must_use]
    pub fn with_cards(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.main_deck = cards.into_iter().collect();
        self
    }

    /// Set the saved-deck name (builder pattern).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Number of cards in the main deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.main_deck.len()
    }

    /// Check if the main deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.main_deck.is_empty()
    }

    /// Ownership figures, whichever the backend attached.
    #[must_use]
    pub fn ownership(&self) -> Option<&CollectionInfo> {
        self.collection_info
            .as_ref()
            .or(self.collection_coverage.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardType;

    #[test]
    fn test_deck_builder() {
        let leader = Card::new("Monkey D. Luffy", CardType::Leader, 0).with_life(5);
        let deck = Deck::new("aggressive", "Red")
            .with_leader(leader)
            .with_cards(vec![
                Card::new("Nami", CardType::Character, 1),
                Card::new("Nami", CardType::Character, 1),
            ]);

        assert_eq!(deck.len(), 2);
        assert!(!deck.is_empty());
        assert_eq!(deck.leader.as_ref().map(|l| l.name.as_str()), Some("Monkey D. Luffy"));
    }

    #[test]
    fn test_decode_defaults() {
        let deck: Deck = serde_json::from_str(r#"{"main_deck": []}"#).unwrap();

        assert_eq!(deck.strategy, "balanced");
        assert_eq!(deck.color, "any");
        assert!(deck.leader.is_none());
        assert!(deck.is_empty());
    }

    #[test]
    fn test_decode_saved_deck() {
        let json = r#"{
            "id": 7,
            "name": "Sapphire Control",
            "strategy": "control",
            "color": "Amber/Sapphire",
            "leader": null,
            "main_deck": [{"name": "Heihei - Boat Snack", "type": "Character", "cost": 2, "colors": ["Amber"]}],
            "created_at": "2024-01-01T00:00:00",
            "updated_at": null
        }"#;

        let deck: Deck = serde_json::from_str(json).unwrap();
        assert_eq!(deck.id, Some(7));
        assert_eq!(deck.name.as_deref(), Some("Sapphire Control"));
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_ownership_prefers_collection_info() {
        let json = r#"{
            "main_deck": [],
            "collection_info": {"owned_cards": 30, "total_cards": 60, "percentage_owned": 50.0, "needed_cards": ["Stitch"]},
            "collection_coverage": {"percentage": 10.0}
        }"#;

        let deck: Deck = serde_json::from_str(json).unwrap();
        assert_eq!(deck.ownership().map(|c| c.percentage_owned), Some(50.0));
    }

    #[test]
    fn test_coverage_percentage_alias() {
        let json = r#"{"main_deck": [], "collection_coverage": {"percentage": 72.5}}"#;
        let deck: Deck = serde_json::from_str(json).unwrap();
        assert_eq!(deck.ownership().map(|c| c.percentage_owned), Some(72.5));
    }
}
