//! Full analysis of one wine: everything the result and trends panels draw.
//!
//! Pipeline: record → score → display score & tier → curves, history,
//! profile, importance. The displayed (one-decimal) score anchors the history
//! series and the "current wine" markers, so the charts agree with the number
//! on the result card.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::AnalyticsConfig;
use crate::engine::{breakdown, ScoreBreakdown};
use crate::history::{history_band, simulate, HistoryBand, SeriesPoint};
use crate::profile::{feature_profile, importance_table, ImportanceRow, ProfileBar};
use crate::quality::{display_score, QualityTier};
use crate::record::ChemistryRecord;
use crate::sweep::{build_curve, Curve};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub record: ChemistryRecord,
    /// Unrounded engine output.
    pub score: f64,
    pub display_score: f64,
    pub tier: QualityTier,
    pub breakdown: ScoreBreakdown,
    pub curves: Vec<Curve>,
    pub history: Vec<SeriesPoint>,
    pub history_band: HistoryBand,
    pub profile: Vec<ProfileBar>,
    pub importance: Vec<ImportanceRow>,
}

/// Run the whole pipeline for one record.
pub fn analyze(
    config: &AnalyticsConfig,
    record: &ChemistryRecord,
    rng: &mut impl Rng,
) -> AnalysisReport {
    let breakdown = breakdown(&config.catalog, record);
    let score = breakdown.score;
    let shown = display_score(score);
    let tier = QualityTier::from_score(shown);

    let curves: Vec<Curve> = config
        .sweeps
        .iter()
        .map(|plan| build_curve(&config.catalog, record, plan, shown))
        .collect();

    log::debug!(
        "Analyzed wine: score={:.3} shown={} tier={} curves={}",
        score,
        shown,
        tier.label(),
        config.sweeps.len()
    );
    if !record.is_finite() {
        log::warn!("Analyzed a record with non-finite attributes; they score as out of range");
    }

    AnalysisReport {
        record: *record,
        score,
        display_score: shown,
        tier,
        breakdown,
        curves,
        history: simulate(shown, rng),
        history_band: history_band(shown),
        profile: feature_profile(record),
        importance: importance_table(record),
    }
}

impl AnalysisReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
