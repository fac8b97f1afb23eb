//! Card type tags.
//!
//! Both games share a small vocabulary of card types. One Piece uses
//! Leader/Character/Event/Stage, Lorcana uses Character/Action/Item.
//! The backend is the source of truth, so unknown tags are carried in
//! `CardType::Other` instead of failing to decode.

use serde::{Deserialize, Serialize};

/// Card type as reported by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CardType {
    Leader,
    Character,
    Event,
    Stage,
    Action,
    Item,
    /// A type tag this client does not know about.
    Other(String),
}

impl CardType {
    /// Every type the client recognizes, in display order.
    pub const KNOWN: [CardType; 6] = [
        CardType::Leader,
        CardType::Character,
        CardType::Event,
        CardType::Stage,
        CardType::Action,
        CardType::Item,
    ];

    /// Parse a known type tag. Returns `None` for anything else.
    #[must_use]
    pub fn known(tag: &str) -> Option<Self> {
        match tag {
            "Leader" => Some(CardType::Leader),
            "Character" => Some(CardType::Character),
            "Event" => Some(CardType::Event),
            "Stage" => Some(CardType::Stage),
            "Action" => Some(CardType::Action),
            "Item" => Some(CardType::Item),
            _ => None,
        }
    }

    /// The wire/display label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            CardType::Leader => "Leader",
            CardType::Character => "Character",
            CardType::Event => "Event",
            CardType::Stage => "Stage",
            CardType::Action => "Action",
            CardType::Item => "Item",
            CardType::Other(tag) => tag,
        }
    }

    /// Whether this is one of the recognized types.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, CardType::Other(_))
    }
}

impl From<String> for CardType {
    fn from(tag: String) -> Self {
        CardType::known(&tag).unwrap_or(CardType::Other(tag))
    }
}

impl From<&str> for CardType {
    fn from(tag: &str) -> Self {
        CardType::known(tag).unwrap_or_else(|| CardType::Other(tag.to_string()))
    }
}

impl From<CardType> for String {
    fn from(card_type: CardType) -> Self {
        match card_type {
            CardType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags() {
        for card_type in CardType::KNOWN {
            assert_eq!(CardType::known(card_type.as_str()), Some(card_type.clone()));
            assert!(card_type.is_known());
        }
    }

    #[test]
    fn test_unknown_tag_is_other() {
        let card_type = CardType::from("Song");
        assert_eq!(card_type, CardType::Other("Song".to_string()));
        assert!(!card_type.is_known());
        assert_eq!(card_type.to_string(), "Song");
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        assert_eq!(CardType::known("stage"), None);
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&CardType::Stage).unwrap();
        assert_eq!(json, "\"Stage\"");

        let decoded: CardType = serde_json::from_str("\"Location\"").unwrap();
        assert_eq!(decoded, CardType::Other("Location".to_string()));
    }
}
