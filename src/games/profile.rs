//! Per-game configuration.
//!
//! The two supported games share one code path. What differs is captured
//! here: which fields exist (leader, life), how many colors a deck is built
//! from, the palette, the API prefix, and the export layout.
//!
//! Build parameters are validated against the profile before any request
//! is made.

use serde::{Deserialize, Serialize};

use crate::cards::CardType;
use crate::error::{DeckError, Result};
use crate::projection::ExportStyle;

/// Wildcard accepted as a color by single-color games.
pub const ANY_COLOR: &str = "any";

/// Supported games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    OnePiece,
    Lorcana,
}

/// Deck archetype used as a build parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Aggressive,
    #[default]
    Balanced,
    Control,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Aggressive, Strategy::Balanced, Strategy::Control];

    /// Wire label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Aggressive => "aggressive",
            Strategy::Balanced => "balanced",
            Strategy::Control => "control",
        }
    }

    /// Parse a wire label, ignoring surrounding whitespace and case.
    pub fn parse(label: &str) -> Result<Self> {
        let wanted = label.trim().to_ascii_lowercase();
        Strategy::ALL
            .into_iter()
            .find(|s| s.as_str() == wanted)
            .ok_or_else(|| {
                DeckError::validation(format!(
                    "Unknown strategy '{}' (expected aggressive, balanced or control)",
                    label
                ))
            })
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters collected from the build form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildParams {
    pub strategy: Strategy,
    pub colors: Vec<String>,
    /// Leader name. Empty means "let the backend pick".
    pub leader: Option<String>,
}

impl BuildParams {
    /// Create parameters with a strategy and colors.
    pub fn new<I, S>(strategy: Strategy, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            strategy,
            colors: colors.into_iter().map(Into::into).collect(),
            leader: None,
        }
    }

    /// Set the leader (builder pattern).
    #[must_use]
    pub fn with_leader(mut self, leader: impl Into<String>) -> Self {
        self.leader = Some(leader.into());
        self
    }
}

/// Build parameters after validation, in the shape the backend expects.
///
/// Single-color games send `color`, two-color games send `colors`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BuildRequest {
    pub strategy: Strategy,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader: Option<String>,
}

/// Configuration for one game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameProfile {
    pub kind: GameKind,

    /// Human-readable name (for display).
    pub display_name: String,

    /// Prefix for game-specific endpoints (build, analyze, suggest).
    pub api_prefix: String,

    /// Decks have a leader card.
    pub has_leader: bool,

    /// Cards carry a life value.
    pub has_life: bool,

    /// Colors a deck is built from.
    pub required_colors: usize,

    /// Valid color tags.
    pub palette: Vec<String>,

    /// Card types offered as filters, in display order.
    pub card_types: Vec<CardType>,

    pub export_style: ExportStyle,

    /// Suggested name for downloaded exports.
    pub export_file_name: String,

    /// Value of the `game` tag on saved decks, if the game uses one.
    pub saved_deck_tag: Option<String>,
}

impl GameProfile {
    /// One Piece TCG: leader-led, single color, six-color palette.
    #[must_use]
    pub fn one_piece() -> Self {
        Self {
            kind: GameKind::OnePiece,
            display_name: "One Piece TCG".to_string(),
            api_prefix: "/api".to_string(),
            has_leader: true,
            has_life: true,
            required_colors: 1,
            palette: ["Red", "Blue", "Green", "Purple", "Black", "Yellow"]
                .map(String::from)
                .to_vec(),
            card_types: vec![CardType::Character, CardType::Event, CardType::Stage],
            export_style: ExportStyle::OnePiece,
            export_file_name: "onepiece_deck.txt".to_string(),
            saved_deck_tag: None,
        }
    }

    /// Disney Lorcana: no leader, two ink colors.
    #[must_use]
    pub fn lorcana() -> Self {
        Self {
            kind: GameKind::Lorcana,
            display_name: "Disney Lorcana".to_string(),
            api_prefix: "/api/lorcana".to_string(),
            has_leader: false,
            has_life: false,
            required_colors: 2,
            palette: ["Amber", "Amethyst", "Emerald", "Ruby", "Sapphire", "Steel"]
                .map(String::from)
                .to_vec(),
            card_types: vec![CardType::Character, CardType::Action, CardType::Item],
            export_style: ExportStyle::Lorcana,
            export_file_name: "lorcana-deck.txt".to_string(),
            saved_deck_tag: Some("lorcana".to_string()),
        }
    }

    /// Full path of a game-specific endpoint.
    #[must_use]
    pub fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.api_prefix, name)
    }

    /// Check whether a color tag belongs to the palette.
    #[must_use]
    pub fn is_valid_color(&self, color: &str) -> bool {
        self.palette.iter().any(|c| c == color)
    }

    /// Whether a saved deck belongs to this game.
    ///
    /// Untagged decks are shown in every game's list.
    #[must_use]
    pub fn owns_saved_deck(&self, tag: Option<&str>) -> bool {
        match (tag, self.saved_deck_tag.as_deref()) {
            (None, _) => true,
            (Some(tag), Some(own)) => tag == own,
            (Some(_), None) => false,
        }
    }

    /// Validate build parameters and shape them for the backend.
    ///
    /// Nothing is sent when this fails.
    pub fn build_request(&self, params: &BuildParams) -> Result<BuildRequest> {
        let colors: Vec<String> = params
            .colors
            .iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();

        if self.required_colors == 1 {
            let color = match colors.as_slice() {
                [] => ANY_COLOR.to_string(),
                [color] => color.clone(),
                _ => return Err(DeckError::validation("Please select a single color")),
            };
            if color != ANY_COLOR && !self.is_valid_color(&color) {
                return Err(DeckError::validation(format!("Unknown color '{}'", color)));
            }

            let leader = if self.has_leader {
                params
                    .leader
                    .as_ref()
                    .map(|l| l.trim().to_string())
                    .filter(|l| !l.is_empty())
            } else {
                None
            };

            return Ok(BuildRequest {
                strategy: params.strategy,
                color: Some(color),
                colors: None,
                leader,
            });
        }

        if colors.len() != self.required_colors {
            return Err(DeckError::validation(format!(
                "Please select {} ink colors",
                self.required_colors
            )));
        }
        for (i, color) in colors.iter().enumerate() {
            if colors[..i].contains(color) {
                return Err(DeckError::validation(
                    "Please select two different ink colors",
                ));
            }
            if !self.is_valid_color(color) {
                return Err(DeckError::validation(format!("Unknown ink color '{}'", color)));
            }
        }

        Ok(BuildRequest {
            strategy: params.strategy,
            color: None,
            colors: Some(colors),
            leader: None,
        })
    }
}
