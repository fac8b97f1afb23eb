//! Everything the deck panel renders, computed in one pass.

use serde::Serialize;

use super::face::CardFace;
use crate::deck::{CollectionInfo, Deck};
use crate::games::GameProfile;
use crate::projection::{compute_stats, group_by_name, DeckStats, TypeFilter};

/// Display model of the current deck.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeckView {
    /// Slot generation this view was computed from.
    pub generation: u64,
    pub name: Option<String>,
    /// Strategy with the first letter capitalized.
    pub strategy_label: String,
    pub color: String,
    /// Only for games with leaders.
    pub leader: Option<CardFace>,
    /// Statistics over the whole main deck, independent of the filter.
    pub stats: DeckStats,
    /// Filter label the rows were selected with.
    pub filter: String,
    /// Labels the filter control offers: `"all"`, then the profile's types.
    pub filter_options: Vec<String>,
    /// Grouped main-deck rows that pass the filter.
    pub cards: Vec<CardFace>,
    pub ownership: Option<CollectionInfo>,
}

impl DeckView {
    /// Project a deck.
    #[must_use]
    pub fn project(deck: &Deck, profile: &GameProfile, filter: &str, generation: u64) -> Self {
        let filter = TypeFilter::parse(filter);
        let stats = compute_stats(&deck.main_deck);
        let groups = group_by_name(filter.apply(&deck.main_deck));
        let cards = groups
            .iter()
            .map(|group| CardFace::from_group(group, profile))
            .collect();

        let leader = if profile.has_leader {
            deck.leader.as_ref().map(|l| CardFace::new(l, 1, profile))
        } else {
            None
        };

        let filter_options = std::iter::once(TypeFilter::All)
            .chain(profile.card_types.iter().cloned().map(TypeFilter::Only))
            .map(|option| option.label().to_string())
            .collect();

        Self {
            generation,
            name: deck.name.clone(),
            strategy_label: capitalize(&deck.strategy),
            color: deck.color.clone(),
            leader,
            stats,
            filter: filter.label().to_string(),
            filter_options,
            cards,
            ownership: deck.ownership().cloned(),
        }
    }

    /// Number of rows shown.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.cards.len()
    }

    /// Number of cards behind the shown rows.
    #[must_use]
    pub fn shown_cards(&self) -> usize {
        self.cards.iter().map(|c| c.count).sum()
    }
}

/// Uppercase the first character.
pub(crate) fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardType};

    fn sample_deck() -> Deck {
        Deck::new("aggressive", "Red")
            .with_leader(Card::new("Luffy", CardType::Leader, 0).with_life(5))
            .with_cards(vec![
                Card::new("Zoro", CardType::Character, 3).with_power(5000),
                Card::new("Zoro", CardType::Character, 3).with_power(5000),
                Card::new("Gum-Gum", CardType::Event, 1),
                Card::new("Sunny", CardType::Stage, 2),
            ])
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("aggressive"), "Aggressive");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("Control"), "Control");
    }

    #[test]
    fn test_project_all() {
        let view = DeckView::project(&sample_deck(), &GameProfile::one_piece(), "all", 3);

        assert_eq!(view.generation, 3);
        assert_eq!(view.strategy_label, "Aggressive");
        assert_eq!(view.row_count(), 3);
        assert_eq!(view.shown_cards(), 4);
        assert_eq!(view.cards[0].title(), "Zoro (x2)");
        assert_eq!(view.leader.as_ref().unwrap().life, Some(5));
    }

    #[test]
    fn test_filter_does_not_change_stats() {
        let profile = GameProfile::one_piece();
        let all = DeckView::project(&sample_deck(), &profile, "all", 0);
        let events = DeckView::project(&sample_deck(), &profile, "Event", 0);

        assert_eq!(events.row_count(), 1);
        assert_eq!(events.filter, "Event");
        assert_eq!(all.stats, events.stats);
    }

    #[test]
    fn test_unknown_filter_shows_nothing() {
        let view = DeckView::project(&sample_deck(), &GameProfile::one_piece(), "Song", 0);
        assert!(view.cards.is_empty());
        assert_eq!(view.stats.total_cards, 4);
    }

    #[test]
    fn test_filter_options_follow_profile() {
        let deck = sample_deck();
        let one_piece = DeckView::project(&deck, &GameProfile::one_piece(), "all", 0);
        assert_eq!(one_piece.filter_options, vec!["all", "Character", "Event", "Stage"]);

        let lorcana = DeckView::project(&deck, &GameProfile::lorcana(), "all", 0);
        assert_eq!(lorcana.filter_options, vec!["all", "Character", "Action", "Item"]);

        for option in &one_piece.filter_options {
            assert_eq!(TypeFilter::parse(option).label(), option.as_str());
        }
    }

    #[test]
    fn test_no_leader_for_lorcana() {
        let view = DeckView::project(&sample_deck(), &GameProfile::lorcana(), "all", 0);
        assert!(view.leader.is_none());
    }
}
