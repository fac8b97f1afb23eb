//! Grouping cards by name.
//!
//! The first occurrence of a name fixes the card face shown for the whole
//! group; later occurrences only bump the count, even when their other
//! fields differ. Groups keep first-occurrence order.

use rustc_hash::FxHashMap;

use crate::cards::Card;

/// One distinct card name and how many copies the deck holds.
#[derive(Clone, Debug, PartialEq)]
pub struct CardGroup {
    /// Representative card (first seen).
    pub card: Card,
    /// Copies, always >= 1.
    pub count: usize,
}

impl CardGroup {
    /// Group name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.card.name
    }
}

/// Ordered mapping name -> group.
///
/// Derived on demand from a card sequence and never updated afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardGroups {
    groups: Vec<CardGroup>,
    index: FxHashMap<String, usize>,
}

impl CardGroups {
    /// Number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Look up a group by card name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardGroup> {
        self.index.get(name).map(|&i| &self.groups[i])
    }

    /// Copies of a name, 0 if absent.
    #[must_use]
    pub fn count_of(&self, name: &str) -> usize {
        self.get(name).map_or(0, |g| g.count)
    }

    /// Groups in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &CardGroup> {
        self.groups.iter()
    }

    /// Names in first-occurrence order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(CardGroup::name)
    }

    /// Sum of counts. Equals the length of the grouped sequence.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.groups.iter().map(|g| g.count).sum()
    }

    /// Each group's card repeated `count` times, in group order.
    #[must_use]
    pub fn expand(&self) -> Vec<Card> {
        self.groups
            .iter()
            .flat_map(|g| std::iter::repeat(g.card.clone()).take(g.count))
            .collect()
    }

    fn add(&mut self, card: &Card) {
        if let Some(&i) = self.index.get(&card.name) {
            self.groups[i].count += 1;
        } else {
            self.index.insert(card.name.clone(), self.groups.len());
            self.groups.push(CardGroup {
                card: card.clone(),
                count: 1,
            });
        }
    }
}

impl<'a> IntoIterator for &'a CardGroups {
    type Item = &'a CardGroup;
    type IntoIter = std::slice::Iter<'a, CardGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Group a card sequence by name.
///
/// ```
/// use tcg_deck_view::cards::{Card, CardType};
/// use tcg_deck_view::projection::group_by_name;
///
/// let cards = vec![
///     Card::new("A", CardType::Character, 1),
///     Card::new("A", CardType::Character, 9),
///     Card::new("B", CardType::Event, 2),
/// ];
///
/// let groups = group_by_name(&cards);
/// assert_eq!(groups.count_of("A"), 2);
/// assert_eq!(groups.get("A").unwrap().card.cost, 1);
/// assert_eq!(groups.names().collect::<Vec<_>>(), vec!["A", "B"]);
/// ```
pub fn group_by_name<'a, I>(cards: I) -> CardGroups
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut groups = CardGroups::default();
    for card in cards {
        groups.add(card);
    }
    groups
}
