//! Feature profile and importance tables for the analysis panel.
//!
//! The profile bars place each headline attribute inside a fixed display
//! range and overlay an "ideal" band. These ranges are for presentation only
//! and are deliberately separate from the scoring catalog.

use serde::{Deserialize, Serialize};

use crate::catalog::Feature;
use crate::record::ChemistryRecord;

/// Display range and ideal band for one profile bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRange {
    pub feature: Feature,
    pub low: f64,
    pub high: f64,
    pub ideal_low: f64,
    pub ideal_high: f64,
}

impl DisplayRange {
    /// Position of `value` within `[low, high]` as a fraction, unclamped.
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.low) / (self.high - self.low)
    }
}

/// Bars in display order.
pub const DISPLAY_RANGES: [DisplayRange; 5] = [
    DisplayRange {
        feature: Feature::Alcohol,
        low: 8.0,
        high: 15.0,
        ideal_low: 11.0,
        ideal_high: 13.0,
    },
    DisplayRange {
        feature: Feature::VolatileAcidity,
        low: 0.1,
        high: 1.2,
        ideal_low: 0.2,
        ideal_high: 0.6,
    },
    DisplayRange {
        feature: Feature::Sulphates,
        low: 0.3,
        high: 2.0,
        ideal_low: 0.5,
        ideal_high: 0.9,
    },
    DisplayRange {
        feature: Feature::CitricAcid,
        low: 0.0,
        high: 1.0,
        ideal_low: 0.2,
        ideal_high: 0.5,
    },
    DisplayRange {
        feature: Feature::TotalSulfurDioxide,
        low: 0.0,
        high: 300.0,
        ideal_low: 50.0,
        ideal_high: 150.0,
    },
];

/// One bar of the feature profile chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileBar {
    pub feature: Feature,
    pub value: f64,
    /// Bar length as a fraction of the track, clamped to `[0, 1]`.
    pub fill: f64,
    /// Ideal band start as a fraction of the track.
    pub ideal_start: f64,
    /// Ideal band end as a fraction of the track.
    pub ideal_end: f64,
}

pub fn feature_profile(record: &ChemistryRecord) -> Vec<ProfileBar> {
    DISPLAY_RANGES
        .iter()
        .map(|range| {
            let value = record.get(range.feature);
            ProfileBar {
                feature: range.feature,
                value,
                fill: range.normalize(value).clamp(0.0, 1.0),
                ideal_start: range.normalize(range.ideal_low),
                ideal_end: range.normalize(range.ideal_high),
            }
        })
        .collect()
}

/// Fixed display weights for the importance panel. Presentation values,
/// not the scoring weights.
pub const IMPORTANCE: [(Feature, f64); 5] = [
    (Feature::Alcohol, 0.85),
    (Feature::VolatileAcidity, 0.75),
    (Feature::Sulphates, 0.70),
    (Feature::CitricAcid, 0.65),
    (Feature::TotalSulfurDioxide, 0.60),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImportanceRow {
    pub feature: Feature,
    pub importance: f64,
    pub value: f64,
}

pub fn importance_table(record: &ChemistryRecord) -> Vec<ImportanceRow> {
    IMPORTANCE
        .iter()
        .map(|&(feature, importance)| ImportanceRow {
            feature,
            importance,
            value: record.get(feature),
        })
        .collect()
}
