//! Quality scoring — maps a chemistry record to a 0–10 score.
//!
//! Every scored feature contributes `proximity × weight × 5` to a baseline of
//! 5, and the total is clamped to `[0, 10]`. A value outside its feature's
//! `[min, max]` contributes nothing, however far out it is.
//!
//! Features with a negative weight lower the score as they approach their
//! optimal value. That is how the heuristic is defined and is kept as-is.
//!
//! ```
//! use vinoscore_logic::engine::score;
//! use vinoscore_logic::record::ChemistryRecord;
//!
//! let s = score(&ChemistryRecord::default());
//! assert!((s - 5.7095).abs() < 1e-3);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{Feature, FeatureCatalog};
use crate::record::ChemistryRecord;

/// Starting value before per-feature contributions.
pub const BASELINE_SCORE: f64 = 5.0;

/// Multiplier applied to `proximity × weight`.
pub const CONTRIBUTION_SCALE: f64 = 5.0;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;

/// Score a record against the built-in catalog.
pub fn score(record: &ChemistryRecord) -> f64 {
    score_with(FeatureCatalog::standard(), record)
}

/// Score a record against an explicit catalog.
pub fn score_with(catalog: &FeatureCatalog, record: &ChemistryRecord) -> f64 {
    let mut total = BASELINE_SCORE;
    for spec in catalog.iter() {
        if let Some(proximity) = spec.proximity(record.get(spec.feature)) {
            total += proximity * spec.weight * CONTRIBUTION_SCALE;
        }
    }
    clamp_score(total)
}

/// Clamp a raw total into `[0, 10]`. NaN passes through unchanged.
pub fn clamp_score(raw: f64) -> f64 {
    raw.clamp(MIN_SCORE, MAX_SCORE)
}

/// Per-feature detail behind a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub feature: Feature,
    pub value: f64,
    pub in_range: bool,
    /// `0.0` when out of range.
    pub proximity: f64,
    pub contribution: f64,
}

/// Full itemization of one scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub baseline: f64,
    pub contributions: Vec<Contribution>,
    /// Baseline plus contributions, before clamping.
    pub raw_total: f64,
    pub score: f64,
}

/// Itemize how each feature moves the score.
///
/// Contributions are accumulated in catalog order, so `score` here is
/// bit-identical to [`score_with`].
pub fn breakdown(catalog: &FeatureCatalog, record: &ChemistryRecord) -> ScoreBreakdown {
    let mut raw_total = BASELINE_SCORE;
    let contributions = catalog
        .iter()
        .map(|spec| {
            let value = record.get(spec.feature);
            let proximity = spec.proximity(value);
            let contribution = proximity.map_or(0.0, |p| p * spec.weight * CONTRIBUTION_SCALE);
            if proximity.is_some() {
                raw_total += contribution;
            }
            Contribution {
                feature: spec.feature,
                value,
                in_range: proximity.is_some(),
                proximity: proximity.unwrap_or(0.0),
                contribution,
            }
        })
        .collect();

    ScoreBreakdown {
        baseline: BASELINE_SCORE,
        contributions,
        raw_total,
        score: clamp_score(raw_total),
    }
}

impl ScoreBreakdown {
    /// The contribution that moved the score most, by magnitude.
    pub fn dominant(&self) -> Option<&Contribution> {
        self.contributions
            .iter()
            .filter(|c| c.in_range)
            .max_by(|a, b| a.contribution.abs().total_cmp(&b.contribution.abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FeatureSpec;

    fn optimal_record() -> ChemistryRecord {
        let mut record = ChemistryRecord::default();
        for spec in FeatureCatalog::standard().iter() {
            record = record.with(spec.feature, spec.optimal);
        }
        record
    }

    #[test]
    fn test_all_optimal_scores_five_and_a_half() {
        assert_eq!(score(&optimal_record()), 5.5);
    }

    #[test]
    fn test_sample_record() {
        let s = score(&ChemistryRecord::default());
        // 5 + 5 × (0.25 − 1/6 + 0.9/7 + 0.10 − 0.05 − 0.12)
        let expected = 5.0 + 5.0 * (0.25 - 1.0 / 6.0 + 0.9 / 7.0 + 0.10 - 0.05 - 0.12);
        assert!((s - expected).abs() < 1e-9, "got {}", s);
        assert!((s - 5.7095).abs() < 1e-3);
    }

    #[test]
    fn test_unscored_fields_ignored() {
        let base = ChemistryRecord::default();
        let s = score(&base);
        let odd = base
            .with(Feature::FixedAcidity, 99.0)
            .with(Feature::ResidualSugar, -4.0)
            .with(Feature::Chlorides, 1e9)
            .with(Feature::FreeSulfurDioxide, 0.0)
            .with(Feature::Ph, 14.0);
        assert_eq!(score(&odd), s);
    }

    #[test]
    fn test_out_of_range_contributes_zero() {
        let base = optimal_record();
        let just_out = base.with(Feature::Alcohol, 14.0001);
        let far_out = base.with(Feature::Alcohol, 1e12);
        // alcohol's 1.5 contribution drops out entirely
        assert!((score(&just_out) - 4.0).abs() < 1e-12);
        assert_eq!(score(&just_out), score(&far_out));
    }

    #[test]
    fn test_boundaries_per_feature() {
        let catalog = FeatureCatalog::standard();
        for spec in catalog.iter() {
            let near_min = spec.optimal - spec.min;
            let near_max = spec.max - spec.optimal;
            let span = spec.span();

            let at_min = spec.proximity(spec.min).unwrap();
            let at_max = spec.proximity(spec.max).unwrap();
            assert!((at_min - (1.0 - near_min / span)).abs() < 1e-12, "{}", spec.feature);
            assert!((at_max - (1.0 - near_max / span)).abs() < 1e-12, "{}", spec.feature);

            let farther = if near_min >= near_max { at_min } else { at_max };
            assert_eq!(farther, 0.0, "{} farther edge", spec.feature);
        }
    }

    #[test]
    fn test_score_always_in_bounds() {
        let extremes = [f64::MIN, -1e300, -1.0, 0.0, 1e-300, 1.0, 1e300, f64::MAX];
        for f in Feature::all() {
            for v in extremes {
                let s = score(&ChemistryRecord::default().with(*f, v));
                assert!((MIN_SCORE..=MAX_SCORE).contains(&s), "{}={} gave {}", f, v, s);
            }
        }
    }

    #[test]
    fn test_non_finite_inputs_do_not_panic() {
        let base = ChemistryRecord::default();
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let s = score(&base.with(Feature::Alcohol, v));
            // treated as out of range
            assert!(s.is_finite());
            assert!((0.0..=10.0).contains(&s));
        }
    }

    #[test]
    fn test_clamps_with_heavy_catalog() {
        let heavy = FeatureCatalog::from_specs(vec![FeatureSpec {
            feature: Feature::Alcohol,
            weight: 3.0,
            min: 9.0,
            max: 14.0,
            optimal: 12.0,
        }])
        .unwrap();
        let record = ChemistryRecord::default().with(Feature::Alcohol, 12.0);
        assert_eq!(score_with(&heavy, &record), MAX_SCORE);

        let sour = FeatureCatalog::from_specs(vec![FeatureSpec {
            feature: Feature::Alcohol,
            weight: -3.0,
            min: 9.0,
            max: 14.0,
            optimal: 12.0,
        }])
        .unwrap();
        assert_eq!(score_with(&sour, &record), MIN_SCORE);
        assert_eq!(breakdown(&sour, &record).raw_total, -10.0);
    }

    #[test]
    fn test_clamp_passes_nan() {
        assert!(clamp_score(f64::NAN).is_nan());
        assert_eq!(clamp_score(-0.5), 0.0);
        assert_eq!(clamp_score(10.5), 10.0);
    }

    #[test]
    fn test_referential_transparency() {
        let record = ChemistryRecord::default().with(Feature::Density, 0.9931);
        let copy = record;
        assert_eq!(score(&record).to_bits(), score(&copy).to_bits());
    }

    #[test]
    fn test_breakdown_matches_score() {
        let catalog = FeatureCatalog::standard();
        let record = ChemistryRecord::default().with(Feature::Sulphates, 1.3);
        let b = breakdown(catalog, &record);
        assert_eq!(b.score.to_bits(), score_with(catalog, &record).to_bits());
        assert_eq!(b.contributions.len(), 6);

        let sulphates = b
            .contributions
            .iter()
            .find(|c| c.feature == Feature::Sulphates)
            .unwrap();
        assert!(!sulphates.in_range);
        assert_eq!(sulphates.contribution, 0.0);
    }

    #[test]
    fn test_negative_weight_lowers_score_near_optimal() {
        let base = ChemistryRecord::default();
        let at_optimal = score(&base.with(Feature::VolatileAcidity, 0.4));
        let at_edge = score(&base.with(Feature::VolatileAcidity, 0.7));
        assert!(at_optimal < at_edge);
    }

    #[test]
    fn test_dominant_contribution() {
        let b = breakdown(FeatureCatalog::standard(), &optimal_record());
        assert_eq!(b.dominant().unwrap().feature, Feature::Alcohol);
    }
}
