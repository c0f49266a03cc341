//! Feature catalog — which chemistry attributes are scored, and how.
//!
//! Every attribute of a [`ChemistryRecord`](crate::record::ChemistryRecord) has a
//! [`Feature`] identifier. Only six of the eleven carry a [`FeatureSpec`]: a
//! linear weight, a valid `[min, max]` range, and an optimal value inside it.
//! The remaining five are accepted on the record but never scored.
//!
//! The built-in table is exposed through [`FeatureCatalog::standard`], built
//! once and shared read-only. Custom catalogs can be loaded from JSON and are
//! validated on construction.

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// One attribute of a chemistry record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Alcohol,
    VolatileAcidity,
    Sulphates,
    CitricAcid,
    TotalSulfurDioxide,
    Density,
    FixedAcidity,
    ResidualSugar,
    Chlorides,
    FreeSulfurDioxide,
    #[serde(rename = "pH")]
    Ph,
}

impl Feature {
    /// All eleven record attributes, in form order.
    pub fn all() -> &'static [Feature] {
        &[
            Self::Alcohol,
            Self::VolatileAcidity,
            Self::Sulphates,
            Self::CitricAcid,
            Self::TotalSulfurDioxide,
            Self::Density,
            Self::FixedAcidity,
            Self::ResidualSugar,
            Self::Chlorides,
            Self::FreeSulfurDioxide,
            Self::Ph,
        ]
    }

    /// The six attributes the standard catalog scores, in table order.
    pub fn scored() -> &'static [Feature] {
        &SCORED_FEATURES
    }

    /// Canonical wire name (matches the serde representation).
    pub fn name(self) -> &'static str {
        match self {
            Self::Alcohol => "alcohol",
            Self::VolatileAcidity => "volatile_acidity",
            Self::Sulphates => "sulphates",
            Self::CitricAcid => "citric_acid",
            Self::TotalSulfurDioxide => "total_sulfur_dioxide",
            Self::Density => "density",
            Self::FixedAcidity => "fixed_acidity",
            Self::ResidualSugar => "residual_sugar",
            Self::Chlorides => "chlorides",
            Self::FreeSulfurDioxide => "free_sulfur_dioxide",
            Self::Ph => "pH",
        }
    }

    /// Human-readable label for chart axes and tables.
    pub fn label(self) -> &'static str {
        match self {
            Self::Alcohol => "Alcohol",
            Self::VolatileAcidity => "Volatile Acidity",
            Self::Sulphates => "Sulphates",
            Self::CitricAcid => "Citric Acid",
            Self::TotalSulfurDioxide => "Total SO2",
            Self::Density => "Density",
            Self::FixedAcidity => "Fixed Acidity",
            Self::ResidualSugar => "Residual Sugar",
            Self::Chlorides => "Chlorides",
            Self::FreeSulfurDioxide => "Free SO2",
            Self::Ph => "pH",
        }
    }

    /// Look up a feature by its wire name.
    pub fn from_name(name: &str) -> Option<Feature> {
        Self::all().iter().copied().find(|f| f.name() == name)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scoring parameters for one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureSpec {
    #[serde(rename = "name")]
    pub feature: Feature,
    /// Linear weight; negative weights subtract from the score.
    pub weight: f64,
    pub min: f64,
    pub max: f64,
    pub optimal: f64,
}

impl FeatureSpec {
    /// The larger of the two half-ranges around `optimal`.
    pub fn span(&self) -> f64 {
        (self.optimal - self.min).max(self.max - self.optimal)
    }

    /// Normalized closeness of `value` to `optimal`.
    ///
    /// `None` when `value` falls outside `[min, max]` (non-finite values
    /// included). Otherwise `1.0` at `optimal`, `0.0` at whichever bound lies
    /// farther from it.
    pub fn proximity(&self, value: f64) -> Option<f64> {
        if !(self.min..=self.max).contains(&value) {
            return None;
        }
        let distance = (value - self.optimal).abs();
        Some(1.0 - distance / self.span())
    }

    fn check(&self) -> Result<(), CatalogError> {
        let values = [self.weight, self.min, self.max, self.optimal];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(CatalogError::NonFinite(self.feature));
        }
        if self.min > self.max {
            return Err(CatalogError::InvertedRange(self.feature));
        }
        if self.optimal < self.min || self.optimal > self.max {
            return Err(CatalogError::OptimalOutOfRange(self.feature));
        }
        if self.span() <= 0.0 {
            return Err(CatalogError::ZeroSpan(self.feature));
        }
        Ok(())
    }
}

const STANDARD_SPECS: [FeatureSpec; 6] = [
    FeatureSpec {
        feature: Feature::Alcohol,
        weight: 0.30,
        min: 9.0,
        max: 14.0,
        optimal: 12.0,
    },
    FeatureSpec {
        feature: Feature::VolatileAcidity,
        weight: -0.25,
        min: 0.2,
        max: 0.7,
        optimal: 0.4,
    },
    FeatureSpec {
        feature: Feature::Sulphates,
        weight: 0.15,
        min: 0.4,
        max: 1.0,
        optimal: 0.65,
    },
    FeatureSpec {
        feature: Feature::CitricAcid,
        weight: 0.10,
        min: 0.1,
        max: 0.5,
        optimal: 0.3,
    },
    FeatureSpec {
        feature: Feature::TotalSulfurDioxide,
        weight: -0.05,
        min: 30.0,
        max: 150.0,
        optimal: 100.0,
    },
    FeatureSpec {
        feature: Feature::Density,
        weight: -0.15,
        min: 0.990,
        max: 1.000,
        optimal: 0.995,
    },
];

static SCORED_FEATURES: [Feature; STANDARD_SPECS.len()] = {
    let mut features = [Feature::Alcohol; STANDARD_SPECS.len()];
    let mut i = 0;
    while i < STANDARD_SPECS.len() {
        features[i] = STANDARD_SPECS[i].feature;
        i += 1;
    }
    features
};

/// Validated, ordered set of feature specs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FeatureSpec>", into = "Vec<FeatureSpec>")]
pub struct FeatureCatalog {
    specs: Vec<FeatureSpec>,
}

impl FeatureCatalog {
    /// The built-in six-feature table.
    pub fn standard() -> &'static FeatureCatalog {
        static STANDARD: OnceLock<FeatureCatalog> = OnceLock::new();
        STANDARD.get_or_init(|| FeatureCatalog {
            specs: STANDARD_SPECS.to_vec(),
        })
    }

    /// Build a catalog, rejecting duplicates and malformed ranges.
    pub fn from_specs(specs: Vec<FeatureSpec>) -> Result<Self, CatalogError> {
        if specs.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, spec) in specs.iter().enumerate() {
            spec.check()?;
            if specs[..i].iter().any(|s| s.feature == spec.feature) {
                return Err(CatalogError::Duplicate(spec.feature));
            }
        }
        Ok(Self { specs })
    }

    /// Parse a JSON array of `{name, weight, min, max, optimal}` objects.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let specs: Vec<FeatureSpec> = serde_json::from_str(json)?;
        Self::from_specs(specs)
    }

    pub fn get(&self, feature: Feature) -> Option<&FeatureSpec> {
        self.specs.iter().find(|s| s.feature == feature)
    }

    pub fn is_scored(&self, feature: Feature) -> bool {
        self.get(feature).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeatureSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl Default for FeatureCatalog {
    fn default() -> Self {
        Self::standard().clone()
    }
}

impl TryFrom<Vec<FeatureSpec>> for FeatureCatalog {
    type Error = CatalogError;

    fn try_from(specs: Vec<FeatureSpec>) -> Result<Self, Self::Error> {
        Self::from_specs(specs)
    }
}

impl From<FeatureCatalog> for Vec<FeatureSpec> {
    fn from(catalog: FeatureCatalog) -> Self {
        catalog.specs
    }
}

/// Reasons a catalog is rejected.
#[derive(Debug)]
pub enum CatalogError {
    Empty,
    Duplicate(Feature),
    NonFinite(Feature),
    InvertedRange(Feature),
    OptimalOutOfRange(Feature),
    /// `min == optimal == max`; proximity would divide by zero.
    ZeroSpan(Feature),
    Json(serde_json::Error),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Json(e)
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "catalog has no features"),
            CatalogError::Duplicate(feat) => write!(f, "feature {} listed more than once", feat),
            CatalogError::NonFinite(feat) => write!(f, "feature {} has a non-finite value", feat),
            CatalogError::InvertedRange(feat) => write!(f, "feature {} has min > max", feat),
            CatalogError::OptimalOutOfRange(feat) => {
                write!(f, "feature {} has optimal outside [min, max]", feat)
            }
            CatalogError::ZeroSpan(feat) => write!(f, "feature {} has a zero-width range", feat),
            CatalogError::Json(e) => write!(f, "catalog JSON error: {}", e),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Json(e) => Some(e),
            _ => None,
        }
    }
}
