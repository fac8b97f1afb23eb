//! Display model for a backend analysis.

use serde::Serialize;

use crate::api::Analysis;
use crate::projection::stats::percentage;

/// One bar of the cost curve.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CurveBar {
    /// Cost as the backend labelled it.
    pub cost: String,
    pub count: usize,
    /// Share of all cards, one decimal.
    pub percentage: f64,
}

/// One row of a labelled distribution.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShareRow {
    pub label: String,
    pub count: usize,
    pub percentage: f64,
}

/// Analysis panel.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisView {
    /// Slot generation of the deck that was analyzed.
    pub generation: u64,
    pub total_cards: usize,
    pub average_cost: Option<f64>,
    /// Ascending by numeric cost; non-numeric labels last.
    pub curve: Vec<CurveBar>,
    pub types: Vec<ShareRow>,
    pub colors: Vec<ShareRow>,
    pub suggestions: Vec<String>,
}

impl AnalysisView {
    /// Project an analysis.
    ///
    /// Percentages are relative to `total_cards`, or to the curve's sum
    /// when the backend left the total out.
    #[must_use]
    pub fn from_analysis(analysis: &Analysis, generation: u64) -> Self {
        let total = if analysis.total_cards > 0 {
            analysis.total_cards
        } else {
            analysis.curve.values().sum()
        };

        let mut curve: Vec<CurveBar> = analysis
            .curve
            .iter()
            .map(|(cost, &count)| CurveBar {
                cost: cost.clone(),
                count,
                percentage: percentage(count, total),
            })
            .collect();
        curve.sort_by_key(|bar| match bar.cost.trim().parse::<u32>() {
            Ok(n) => (0, n, String::new()),
            Err(_) => (1, 0, bar.cost.clone()),
        });

        let rows = |map: &std::collections::BTreeMap<String, usize>| {
            map.iter()
                .map(|(label, &count)| ShareRow {
                    label: label.clone(),
                    count,
                    percentage: percentage(count, total),
                })
                .collect::<Vec<_>>()
        };

        Self {
            generation,
            total_cards: total,
            average_cost: analysis.average_cost,
            curve,
            types: rows(&analysis.type_distribution),
            colors: rows(&analysis.color_distribution),
            suggestions: analysis.suggestions.clone(),
        }
    }
}
