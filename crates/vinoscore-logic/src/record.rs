//! Chemistry record — the eleven measured properties of one wine sample.

use serde::{Deserialize, Serialize};

use crate::catalog::Feature;

/// Measured properties of a wine sample.
///
/// Values are taken as given; nothing here is range-checked. Derived records
/// come from [`ChemistryRecord::with`], which copies rather than mutates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChemistryRecord {
    /// % by volume.
    pub alcohol: f64,
    /// g/L (acetic acid).
    pub volatile_acidity: f64,
    /// g/L (potassium sulphate).
    pub sulphates: f64,
    /// g/L.
    pub citric_acid: f64,
    /// mg/L.
    pub total_sulfur_dioxide: f64,
    /// g/cm³.
    pub density: f64,
    /// g/L (tartaric acid).
    pub fixed_acidity: f64,
    /// g/L.
    pub residual_sugar: f64,
    /// g/L (sodium chloride).
    pub chlorides: f64,
    /// mg/L.
    pub free_sulfur_dioxide: f64,
    #[serde(rename = "pH")]
    pub ph: f64,
}

impl Default for ChemistryRecord {
    /// The sample wine the input form starts with.
    fn default() -> Self {
        Self {
            alcohol: 11.5,
            volatile_acidity: 0.5,
            sulphates: 0.6,
            citric_acid: 0.3,
            total_sulfur_dioxide: 100.0,
            density: 0.996,
            fixed_acidity: 7.4,
            residual_sugar: 2.0,
            chlorides: 0.088,
            free_sulfur_dioxide: 25.0,
            ph: 3.4,
        }
    }
}

impl ChemistryRecord {
    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Alcohol => self.alcohol,
            Feature::VolatileAcidity => self.volatile_acidity,
            Feature::Sulphates => self.sulphates,
            Feature::CitricAcid => self.citric_acid,
            Feature::TotalSulfurDioxide => self.total_sulfur_dioxide,
            Feature::Density => self.density,
            Feature::FixedAcidity => self.fixed_acidity,
            Feature::ResidualSugar => self.residual_sugar,
            Feature::Chlorides => self.chlorides,
            Feature::FreeSulfurDioxide => self.free_sulfur_dioxide,
            Feature::Ph => self.ph,
        }
    }

    /// Copy of this record with one attribute replaced.
    #[must_use]
    pub fn with(&self, feature: Feature, value: f64) -> Self {
        let mut next = *self;
        let slot = match feature {
            Feature::Alcohol => &mut next.alcohol,
            Feature::VolatileAcidity => &mut next.volatile_acidity,
            Feature::Sulphates => &mut next.sulphates,
            Feature::CitricAcid => &mut next.citric_acid,
            Feature::TotalSulfurDioxide => &mut next.total_sulfur_dioxide,
            Feature::Density => &mut next.density,
            Feature::FixedAcidity => &mut next.fixed_acidity,
            Feature::ResidualSugar => &mut next.residual_sugar,
            Feature::Chlorides => &mut next.chlorides,
            Feature::FreeSulfurDioxide => &mut next.free_sulfur_dioxide,
            Feature::Ph => &mut next.ph,
        };
        *slot = value;
        next
    }

    /// Whether every attribute is a finite number.
    pub fn is_finite(&self) -> bool {
        Feature::all().iter().all(|f| self.get(*f).is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overrides_only_target() {
        let base = ChemistryRecord::default();
        let next = base.with(Feature::VolatileAcidity, 0.9);
        assert_eq!(next.volatile_acidity, 0.9);
        assert_eq!(base.volatile_acidity, 0.5);
        for f in Feature::all() {
            if *f != Feature::VolatileAcidity {
                assert_eq!(next.get(*f), base.get(*f), "{} changed", f);
            }
        }
    }

    #[test]
    fn test_get_with_agree_for_every_feature() {
        let base = ChemistryRecord::default();
        for (i, f) in Feature::all().iter().enumerate() {
            let v = 100.0 + i as f64;
            assert_eq!(base.with(*f, v).get(*f), v);
        }
    }

    #[test]
    fn test_json_uses_wire_names() {
        let json = serde_json::to_value(ChemistryRecord::default()).unwrap();
        assert_eq!(json["pH"], 3.4);
        assert_eq!(json["total_sulfur_dioxide"], 100.0);
        assert!(json.get("ph").is_none());

        let back: ChemistryRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, ChemistryRecord::default());
    }

    #[test]
    fn test_is_finite() {
        assert!(ChemistryRecord::default().is_finite());
        assert!(!ChemistryRecord::default()
            .with(Feature::Chlorides, f64::NAN)
            .is_finite());
    }
}
