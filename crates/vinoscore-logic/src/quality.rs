//! Display-side interpretation of a score: rounding and quality tiers.

use serde::{Deserialize, Serialize};

/// Verbal quality grade shown next to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QualityTier {
    BelowAverage,
    Average,
    Good,
    VeryGood,
    Exceptional,
}

impl QualityTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            Self::Exceptional
        } else if score >= 7.0 {
            Self::VeryGood
        } else if score >= 6.0 {
            Self::Good
        } else if score >= 5.0 {
            Self::Average
        } else {
            Self::BelowAverage
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Exceptional => "Exceptional",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::BelowAverage => "Below Average",
        }
    }
}

/// Round a score to one decimal place for presentation.
///
/// Rounds the exact binary value, so 6.05 (stored just below 6.05) shows as
/// 6.0. Exact ties such as 5.25 round up.
pub fn display_score(score: f64) -> f64 {
    let quarters = score * 4.0;
    if quarters.fract() == 0.0 && quarters.rem_euclid(2.0) == 1.0 {
        return (score * 10.0).ceil() / 10.0;
    }
    format!("{:.1}", score).parse().unwrap_or(score)
}

/// Fraction of the 0–10 scale, for progress-bar widths.
pub fn scale_fraction(score: f64) -> f64 {
    (score / 10.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(QualityTier::from_score(10.0), QualityTier::Exceptional);
        assert_eq!(QualityTier::from_score(8.0), QualityTier::Exceptional);
        assert_eq!(QualityTier::from_score(7.99), QualityTier::VeryGood);
        assert_eq!(QualityTier::from_score(7.0), QualityTier::VeryGood);
        assert_eq!(QualityTier::from_score(6.0), QualityTier::Good);
        assert_eq!(QualityTier::from_score(5.7), QualityTier::Average);
        assert_eq!(QualityTier::from_score(5.0), QualityTier::Average);
        assert_eq!(QualityTier::from_score(4.99), QualityTier::BelowAverage);
        assert_eq!(QualityTier::from_score(0.0), QualityTier::BelowAverage);
    }

    #[test]
    fn test_nan_is_below_average() {
        assert_eq!(QualityTier::from_score(f64::NAN), QualityTier::BelowAverage);
    }

    #[test]
    fn test_tiers_ordered() {
        assert!(QualityTier::Exceptional > QualityTier::VeryGood);
        assert!(QualityTier::Average > QualityTier::BelowAverage);
    }

    #[test]
    fn test_display_score() {
        assert_eq!(display_score(5.709523809523809), 5.7);
        assert_eq!(display_score(5.5), 5.5);
        assert_eq!(display_score(7.96), 8.0);
        assert_eq!(display_score(0.0), 0.0);
        assert_eq!(display_score(10.0), 10.0);
    }

    #[test]
    fn test_display_score_rounds_stored_value() {
        // 6.05 and 0.15 are stored slightly below their decimal spelling
        assert_eq!(display_score(6.05), 6.0);
        assert_eq!(display_score(0.15), 0.1);
        // 6.15 is stored slightly above
        assert_eq!(display_score(6.15), 6.2);
    }

    #[test]
    fn test_display_score_exact_ties_round_up() {
        assert_eq!(display_score(5.25), 5.3);
        assert_eq!(display_score(5.75), 5.8);
        assert_eq!(display_score(0.25), 0.3);
        assert_eq!(display_score(9.5), 9.5);
    }

    #[test]
    fn test_display_score_non_finite() {
        assert!(display_score(f64::NAN).is_nan());
        assert_eq!(display_score(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_labels() {
        assert_eq!(QualityTier::VeryGood.label(), "Very Good");
        assert_eq!(QualityTier::BelowAverage.label(), "Below Average");
    }

    #[test]
    fn test_scale_fraction() {
        assert_eq!(scale_fraction(5.5), 0.55);
        assert_eq!(scale_fraction(12.0), 1.0);
    }
}
