//! Side-by-side comparison of two wines.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::catalog::{Feature, FeatureCatalog};
use crate::engine::score_with;
use crate::quality::display_score;
use crate::record::ChemistryRecord;

/// How one wine's value relates to the other's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Standing {
    Higher,
    Lower,
    /// Equal, or not comparable (NaN on either side).
    Equal,
}

impl Standing {
    pub fn of(this: f64, other: f64) -> Self {
        match this.partial_cmp(&other) {
            Some(Ordering::Greater) => Standing::Higher,
            Some(Ordering::Less) => Standing::Lower,
            _ => Standing::Equal,
        }
    }
}

/// One line of the comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub label: String,
    pub first: f64,
    pub second: f64,
    /// The first wine relative to the second.
    pub standing: Standing,
}

impl ComparisonRow {
    fn new(label: &str, first: f64, second: f64) -> Self {
        Self {
            label: label.to_string(),
            first,
            second,
            standing: Standing::of(first, second),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub rows: Vec<ComparisonRow>,
}

/// Attributes shown under the score row.
const COMPARED: [Feature; 4] = [
    Feature::Alcohol,
    Feature::VolatileAcidity,
    Feature::Sulphates,
    Feature::CitricAcid,
];

/// Compare two wines: display scores first, then the headline attributes.
pub fn compare(
    catalog: &FeatureCatalog,
    first: &ChemistryRecord,
    second: &ChemistryRecord,
) -> Comparison {
    let mut rows = Vec::with_capacity(COMPARED.len() + 1);
    rows.push(ComparisonRow::new(
        "Quality Score",
        display_score(score_with(catalog, first)),
        display_score(score_with(catalog, second)),
    ));
    for feature in COMPARED {
        rows.push(ComparisonRow::new(
            feature.label(),
            first.get(feature),
            second.get(feature),
        ));
    }
    Comparison { rows }
}
