//! Display model for one card row.

use serde::Serialize;

use crate::cards::Card;
use crate::games::GameProfile;
use crate::projection::CardGroup;

/// A card as the UI shows it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardFace {
    pub name: String,
    pub count: usize,
    pub type_label: String,
    pub cost: u32,
    /// Present only for cards with non-zero power.
    pub power: Option<u32>,
    pub colors: Vec<String>,
    pub effect: Option<String>,
    /// Present only when the game has life totals.
    pub life: Option<u32>,
    pub image_url: Option<String>,
}

impl CardFace {
    /// Face for `count` copies of `card`.
    #[must_use]
    pub fn new(card: &Card, count: usize, profile: &GameProfile) -> Self {
        Self {
            name: card.name.clone(),
            count,
            type_label: card.card_type.to_string(),
            cost: card.cost,
            power: card.power.filter(|&p| p > 0),
            colors: card.colors.iter().cloned().collect(),
            effect: card.effect.clone().filter(|e| !e.trim().is_empty()),
            life: if profile.has_life { card.life } else { None },
            image_url: card.image_url.clone(),
        }
    }

    /// Face for a grouped row.
    #[must_use]
    pub fn from_group(group: &CardGroup, profile: &GameProfile) -> Self {
        Self::new(&group.card, group.count, profile)
    }

    /// `(x{count})`, or `None` for a single copy.
    #[must_use]
    pub fn count_suffix(&self) -> Option<String> {
        (self.count > 1).then(|| format!("(x{})", self.count))
    }

    /// Name with the count suffix, e.g. `Luffy (x4)`.
    #[must_use]
    pub fn title(&self) -> String {
        match self.count_suffix() {
            Some(suffix) => format!("{} {}", self.name, suffix),
            None => self.name.clone(),
        }
    }
}
