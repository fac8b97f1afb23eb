//! Deck statistics.
//!
//! Pure aggregation over a card sequence. Distributions keep
//! first-appearance order so repeated calls render identically.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardType};

/// Share of one card type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeShare {
    pub card_type: CardType,
    pub count: usize,
    /// `count / total_cards * 100`, one decimal.
    pub percentage: f64,
}

/// Cards carrying one color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCount {
    pub color: String,
    pub count: usize,
}

/// Aggregates over a card sequence.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckStats {
    pub total_cards: usize,

    /// Mean cost, two decimals. 0.0 for an empty sequence.
    pub avg_cost: f64,

    /// Type counts in first-appearance order.
    pub type_distribution: Vec<TypeShare>,

    /// Color counts in first-appearance order. A multi-color card counts
    /// once per color, so the sum may exceed `total_cards`.
    pub color_distribution: Vec<ColorCount>,

    /// Cost -> count, ascending cost.
    pub cost_curve: BTreeMap<u32, usize>,
}

impl DeckStats {
    /// Count for a type, 0 if absent.
    #[must_use]
    pub fn type_count(&self, card_type: &CardType) -> usize {
        self.type_distribution
            .iter()
            .find(|t| &t.card_type == card_type)
            .map_or(0, |t| t.count)
    }

    /// Count for a color, 0 if absent.
    #[must_use]
    pub fn color_count(&self, color: &str) -> usize {
        self.color_distribution
            .iter()
            .find(|c| c.color == color)
            .map_or(0, |c| c.count)
    }
}

/// Round to a fixed number of decimals.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Percentage of `count` in `total`, one decimal. 0.0 when `total` is 0.
pub(crate) fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        round_to(count as f64 / total as f64 * 100.0, 1)
    }
}

/// Compute statistics for a card sequence.
///
/// ```
/// use tcg_deck_view::cards::{Card, CardType};
/// use tcg_deck_view::projection::compute_stats;
///
/// let cards = vec![
///     Card::new("A", CardType::Character, 2).with_colors(["Red"]),
///     Card::new("B", CardType::Event, 4).with_colors(["Red", "Blue"]),
/// ];
///
/// let stats = compute_stats(&cards);
/// assert_eq!(stats.avg_cost, 3.0);
/// assert_eq!(stats.color_count("Red"), 2);
/// ```
pub fn compute_stats<'a, I>(cards: I) -> DeckStats
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut total_cards = 0usize;
    let mut total_cost = 0u64;

    let mut type_counts: Vec<(CardType, usize)> = Vec::new();
    let mut type_index: FxHashMap<CardType, usize> = FxHashMap::default();
    let mut color_distribution: Vec<ColorCount> = Vec::new();
    let mut color_index: FxHashMap<String, usize> = FxHashMap::default();
    let mut cost_curve = BTreeMap::new();

    for card in cards {
        total_cards += 1;
        total_cost += u64::from(card.cost);

        match type_index.get(&card.card_type) {
            Some(&i) => type_counts[i].1 += 1,
            None => {
                type_index.insert(card.card_type.clone(), type_counts.len());
                type_counts.push((card.card_type.clone(), 1));
            }
        }

        for color in &card.colors {
            match color_index.get(color) {
                Some(&i) => color_distribution[i].count += 1,
                None => {
                    color_index.insert(color.clone(), color_distribution.len());
                    color_distribution.push(ColorCount {
                        color: color.clone(),
                        count: 1,
                    });
                }
            }
        }

        *cost_curve.entry(card.cost).or_insert(0) += 1;
    }

    let avg_cost = if total_cards == 0 {
        0.0
    } else {
        round_to(total_cost as f64 / total_cards as f64, 2)
    };

    let type_distribution = type_counts
        .into_iter()
        .map(|(card_type, count)| TypeShare {
            card_type,
            count,
            percentage: percentage(count, total_cards),
        })
        .collect();

    DeckStats {
        total_cards,
        avg_cost,
        type_distribution,
        color_distribution,
        cost_curve,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence() {
        let stats = compute_stats(&Vec::<Card>::new());

        assert_eq!(stats.total_cards, 0);
        assert_eq!(stats.avg_cost, 0.0);
        assert!(!stats.avg_cost.is_nan());
        assert!(stats.type_distribution.is_empty());
        assert!(stats.color_distribution.is_empty());
        assert!(stats.cost_curve.is_empty());
    }

    #[test]
    fn test_two_card_example() {
        let cards = vec![
            Card::new("A", CardType::Character, 2).with_colors(["Red"]),
            Card::new("B", CardType::Event, 4).with_colors(["Red", "Blue"]),
        ];

        let stats = compute_stats(&cards);

        assert_eq!(stats.total_cards, 2);
        assert_eq!(stats.avg_cost, 3.0);
        assert_eq!(
            stats.type_distribution,
            vec![
                TypeShare { card_type: CardType::Character, count: 1, percentage: 50.0 },
                TypeShare { card_type: CardType::Event, count: 1, percentage: 50.0 },
            ]
        );
        assert_eq!(
            stats.color_distribution,
            vec![
                ColorCount { color: "Red".to_string(), count: 2 },
                ColorCount { color: "Blue".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_avg_cost_rounds_to_two_decimals() {
        let cards = vec![
            Card::new("A", CardType::Character, 1),
            Card::new("B", CardType::Character, 1),
            Card::new("C", CardType::Character, 2),
        ];

        // 4 / 3 = 1.333...
        assert_eq!(compute_stats(&cards).avg_cost, 1.33);
    }

    #[test]
    fn test_type_percentage_rounds_to_one_decimal() {
        let cards = vec![
            Card::new("A", CardType::Character, 1),
            Card::new("B", CardType::Action, 1),
            Card::new("C", CardType::Item, 1),
        ];

        let stats = compute_stats(&cards);
        assert_eq!(stats.type_distribution[0].percentage, 33.3);
        assert_eq!(stats.type_count(&CardType::Item), 1);
        assert_eq!(stats.type_count(&CardType::Stage), 0);
    }

    #[test]
    fn test_cost_curve_ascending() {
        let cards = vec![
            Card::new("A", CardType::Character, 5),
            Card::new("B", CardType::Character, 1),
            Card::new("C", CardType::Character, 5),
            Card::new("D", CardType::Character, 10),
        ];

        let stats = compute_stats(&cards);
        let curve: Vec<_> = stats.cost_curve.into_iter().collect();
        assert_eq!(curve, vec![(1, 1), (5, 2), (10, 1)]);
    }

    #[test]
    fn test_colorless_cards_add_nothing() {
        let cards = vec![Card::new("A", CardType::Item, 3)];
        let stats = compute_stats(&cards);
        assert!(stats.color_distribution.is_empty());
        assert_eq!(stats.color_count("Red"), 0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(2.345, 1), 2.3);
        assert_eq!(round_to(4.2, 2), 4.2);
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(1, 8), 12.5);
    }
}
