//! Card faces as received from the backend.
//!
//! A `Card` is immutable once decoded. The same card name may appear many
//! times in a deck; each occurrence is a separate value.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card_type::CardType;

/// Color tags of a card.
///
/// Inline storage for the common case: one color, occasionally two.
pub type Colors = SmallVec<[String; 2]>;

/// A single card.
///
/// ## Example
///
/// ```
/// use tcg_deck_view::cards::{Card, CardType};
///
/// let zoro = Card::new("Roronoa Zoro", CardType::Character, 3)
///     .with_power(5000)
///     .with_colors(["Red"]);
///
/// assert_eq!(zoro.cost, 3);
/// assert!(zoro.has_color("Red"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Card name. Grouping and export key.
    pub name: String,

    /// Card type.
    #[serde(rename = "type")]
    pub card_type: CardType,

    /// Play cost. Missing costs decode as 0.
    #[serde(default)]
    pub cost: u32,

    /// Power (One Piece) or strength (Lorcana).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<u32>,

    /// Color tags.
    #[serde(default)]
    pub colors: Colors,

    /// Rules text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Life total, One Piece leaders only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life: Option<u32>,

    /// Lorcana only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inkable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
}

impl Card {
    /// Create a card with no colors and no optional fields.
    #[must_use]
    pub fn new(name: impl Into<String>, card_type: impl Into<CardType>, cost: u32) -> Self {
        Self {
            name: name.into(),
            card_type: card_type.into(),
            cost,
            power: None,
            colors: Colors::new(),
            effect: None,
            image_url: None,
            life: None,
            inkable: None,
            attribute: None,
            set: None,
            card_number: None,
            rarity: None,
        }
    }

    /// Set power (builder pattern).
    #[must_use]
    pub fn with_power(mut self, power: u32) -> Self {
        self.power = Some(power);
        self
    }

    /// Set colors (builder pattern).
    #[must_use]
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Set rules text (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = Some(effect.into());
        self
    }

    /// Set life (builder pattern).
    #[must_use]
    pub fn with_life(mut self, life: u32) -> Self {
        self.life = Some(life);
        self
    }

    /// Set image URL (builder pattern).
    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Check whether the card carries a color tag.
    #[must_use]
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// Check whether the card is of the given type.
    #[must_use]
    pub fn is_type(&self, card_type: &CardType) -> bool {
        &self.card_type == card_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_builder() {
        let card = Card::new("Nami", CardType::Character, 1)
            .with_power(2000)
            .with_colors(["Red", "Blue"])
            .with_effect("On Play: Draw 1 card.");

        assert_eq!(card.name, "Nami");
        assert_eq!(card.power, Some(2000));
        assert_eq!(card.colors.len(), 2);
        assert!(card.has_color("Blue"));
        assert!(!card.has_color("Green"));
        assert_eq!(card.effect.as_deref(), Some("On Play: Draw 1 card."));
    }

    #[test]
    fn test_decode_one_piece_leader() {
        let json = r#"{
            "name": "Monkey D. Luffy",
            "type": "Leader",
            "colors": ["Red"],
            "power": 5000,
            "life": 5,
            "attribute": "Strike",
            "cost": 0,
            "effect": "Your Characters gain +1000 power during your turn.",
            "set": "ST01",
            "card_number": "001",
            "rarity": "Leader",
            "image_url": "https://example.invalid/ST01-001.png"
        }"#;

        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.card_type, CardType::Leader);
        assert_eq!(card.life, Some(5));
        assert_eq!(card.set.as_deref(), Some("ST01"));
    }

    #[test]
    fn test_decode_lorcana_card_with_missing_fields() {
        let json = r#"{"name": "Heihei - Boat Snack", "type": "Character", "colors": ["Amber"], "inkable": true}"#;

        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.cost, 0);
        assert_eq!(card.power, None);
        assert_eq!(card.inkable, Some(true));
    }

    #[test]
    fn test_null_power_decodes_as_none() {
        let json = r#"{"name": "Gum-Gum Pistol", "type": "Event", "cost": 1, "power": null, "colors": ["Red"]}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.power, None);
    }

    #[test]
    fn test_serialization_omits_absent_fields() {
        let card = Card::new("Test", CardType::Event, 2).with_colors(["Blue"]);
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["type"], "Event");
        assert!(json.get("power").is_none());
        assert!(json.get("life").is_none());
    }
}
