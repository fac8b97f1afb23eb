//! Request and response bodies.
//!
//! Shapes follow the backend's JSON. Response types are lenient: every
//! field the client can live without has a default, so a partially
//! populated payload still decodes.

use std::collections::BTreeMap;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::{CollectionInfo, Deck};

// =============================================================================
// Requests
// =============================================================================

/// Body of `analyze-deck`.
#[derive(Clone, Debug, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub deck: &'a Vector<Card>,
}

/// Body of `suggest-improvements`.
#[derive(Clone, Debug, Serialize)]
pub struct ImprovementsRequest<'a> {
    pub deck: &'a Deck,
}

/// Body of `simulate-combat`.
#[derive(Clone, Debug, Serialize)]
pub struct SimulateRequest<'a> {
    pub player_deck: &'a Deck,
    pub opponent_deck_id: &'a str,
    pub num_simulations: u32,
}

/// Body of `POST /api/decks`.
#[derive(Clone, Debug, Serialize)]
pub struct SaveDeckRequest<'a> {
    pub name: &'a str,
    pub strategy: &'a str,
    pub color: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader: Option<&'a Card>,
    pub main_deck: &'a Vector<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<&'a str>,
}

/// Body of `POST /api/collection`.
#[derive(Clone, Debug, Serialize)]
pub struct AddCardRequest<'a> {
    pub card_name: &'a str,
    pub quantity: u32,
}

/// Body of `POST /api/collection/add-structure-deck`.
#[derive(Clone, Debug, Serialize)]
pub struct AddStructureDeckRequest<'a> {
    pub deck_code: &'a str,
}

/// Body of `login` and `register`.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

// =============================================================================
// Responses
// =============================================================================

/// Backend deck analysis.
///
/// One Piece sends the cost curve as `curve`, Lorcana as
/// `cost_distribution`; both land in `curve`. Keys are costs as strings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(default)]
    pub total_cards: usize,

    /// Only Lorcana reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_cost: Option<f64>,

    #[serde(default, alias = "cost_distribution")]
    pub curve: BTreeMap<String, usize>,

    #[serde(default)]
    pub type_distribution: BTreeMap<String, usize>,

    #[serde(default)]
    pub color_distribution: BTreeMap<String, usize>,

    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// One improvement option.
///
/// Lorcana wraps the deck as `{description, deck}`; One Piece returns the
/// deck itself. Both decode to this.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "ImprovementRepr")]
pub struct Improvement {
    pub description: String,
    pub deck: Deck,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ImprovementRepr {
    Wrapped {
        #[serde(default)]
        description: String,
        deck: Deck,
    },
    Inline(InlineImprovement),
}

#[derive(Deserialize)]
struct InlineImprovement {
    #[serde(default)]
    description: String,
    #[serde(flatten)]
    deck: Deck,
}

impl From<ImprovementRepr> for Improvement {
    fn from(repr: ImprovementRepr) -> Self {
        match repr {
            ImprovementRepr::Wrapped { description, deck } => Self { description, deck },
            ImprovementRepr::Inline(InlineImprovement { description, deck }) => {
                Self { description, deck }
            }
        }
    }
}

impl Improvement {
    /// Ownership coverage, if the backend computed it.
    #[must_use]
    pub fn coverage(&self) -> Option<&CollectionInfo> {
        self.deck.ownership()
    }
}

/// Improvement options keyed by kind (`balanced`, `aggressive`, ...).
pub type Improvements = BTreeMap<String, Improvement>;

/// Summary of a preconstructed structure deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureDeckSummary {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub leader: String,
}

/// Structure deck with its card list (name -> copies).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureDeck {
    #[serde(flatten)]
    pub summary: StructureDeckSummary,
    #[serde(default)]
    pub cards: BTreeMap<String, u32>,
}

impl StructureDeck {
    /// Total copies across the list.
    #[must_use]
    pub fn total_cards(&self) -> u32 {
        self.cards.values().sum()
    }
}

/// Opponent offered for combat simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OpponentDeck {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub strategy: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub avg_cost: f64,
    /// Tournament win rate, percent.
    #[serde(default)]
    pub win_rate: f64,
}

/// Per-deck figures used by the simulator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchupDeckStats {
    #[serde(default)]
    pub strategy: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub avg_cost: f64,
    #[serde(default)]
    pub character_ratio: f64,
    #[serde(default)]
    pub total_cards: usize,
}

/// Cards the simulator flagged as matchup-relevant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyCards {
    #[serde(default)]
    pub high_power: Vec<String>,
    #[serde(default)]
    pub low_cost: Vec<String>,
    #[serde(default)]
    pub events: Vec<String>,
}

/// Combat simulation outcome.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatResults {
    /// Percent, two decimals.
    #[serde(default)]
    pub win_rate: f64,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub simulations_run: u32,
    #[serde(default)]
    pub avg_win_turns: f64,
    #[serde(default)]
    pub avg_loss_turns: f64,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub key_cards: KeyCards,
    #[serde(default)]
    pub deck1_stats: MatchupDeckStats,
    #[serde(default)]
    pub deck2_stats: MatchupDeckStats,
    #[serde(default)]
    pub matchup_type: String,
    #[serde(default)]
    pub opponent_name: String,
    #[serde(default)]
    pub opponent_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent_tournament_win_rate: Option<f64>,
}

/// One row of the user's collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionItem {
    pub id: u64,
    pub card_name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// Logged-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
}
