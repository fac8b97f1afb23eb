//! Filtering cards by type.
//!
//! The filter value comes straight from a UI control: `"all"` or a type
//! label. A label that is neither matches nothing.

use crate::cards::{Card, CardType};

/// Parsed filter value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum TypeFilter {
    /// Keep every card.
    #[default]
    All,
    /// Keep cards of one known type.
    Only(CardType),
    /// Unrecognized label. Keeps nothing.
    Unknown(String),
}

impl TypeFilter {
    /// Parse a filter label.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        if label == "all" {
            return TypeFilter::All;
        }
        match CardType::known(label) {
            Some(card_type) => TypeFilter::Only(card_type),
            None => TypeFilter::Unknown(label.to_string()),
        }
    }

    /// Check whether a card passes.
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(card_type) => card.is_type(card_type),
            TypeFilter::Unknown(_) => false,
        }
    }

    /// Label as accepted by `parse`.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Only(card_type) => card_type.as_str(),
            TypeFilter::Unknown(label) => label,
        }
    }

    /// Apply to a card sequence, keeping relative order.
    pub fn apply<'a, I>(&self, cards: I) -> Vec<&'a Card>
    where
        I: IntoIterator<Item = &'a Card>,
    {
        cards.into_iter().filter(|card| self.matches(card)).collect()
    }
}

impl From<&str> for TypeFilter {
    fn from(label: &str) -> Self {
        TypeFilter::parse(label)
    }
}

/// Filter a card sequence by a type label.
///
/// Returns references into the input, so `"all"` yields the very same
/// cards in the same order.
pub fn filter_by_type<'a, I>(cards: I, filter: &str) -> Vec<&'a Card>
where
    I: IntoIterator<Item = &'a Card>,
{
    TypeFilter::parse(filter).apply(cards)
}
