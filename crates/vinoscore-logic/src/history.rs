//! Synthetic score history for the trend chart.
//!
//! There is no real history behind a single prediction. The trend chart
//! instead shows twelve points that drift up from one point below the score
//! and finish exactly on it, with a little random wobble along the way.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::engine::{MAX_SCORE, MIN_SCORE};

/// Number of points in a series (one per month).
pub const HISTORY_LEN: usize = 12;

/// Half-width of the uniform wobble added to each non-final point.
pub const HISTORY_JITTER: f64 = 0.4;

/// One month on the trend chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub index: usize,
    pub value: f64,
}

/// The band the series is drawn around.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryBand {
    /// Where the series starts drifting from: one below the score, floored at 0.
    pub floor: f64,
    /// One above the score, capped at 10.
    pub ceiling: f64,
}

pub fn history_band(final_score: f64) -> HistoryBand {
    HistoryBand {
        floor: (final_score - 1.0).max(MIN_SCORE),
        ceiling: (final_score + 1.0).min(MAX_SCORE),
    }
}

/// Generate a 12-point series ending exactly at `final_score`.
///
/// Point `i < 11` is `floor + r + (i / 11) × (final − floor)` with `r` drawn
/// uniformly from `[−0.4, 0.4]`, clamped to `[0, 10]`. Point 11 is
/// `final_score` itself, untouched.
pub fn simulate(final_score: f64, rng: &mut impl Rng) -> Vec<SeriesPoint> {
    let floor = history_band(final_score).floor;
    let last = HISTORY_LEN - 1;

    (0..HISTORY_LEN)
        .map(|index| {
            let value = if index == last {
                final_score
            } else {
                let wobble = rng.gen_range(-HISTORY_JITTER..=HISTORY_JITTER);
                let progress = index as f64 / last as f64;
                (floor + wobble + progress * (final_score - floor)).clamp(MIN_SCORE, MAX_SCORE)
            };
            SeriesPoint { index, value }
        })
        .collect()
}

/// [`simulate`] with the thread-local generator.
pub fn simulate_unseeded(final_score: f64) -> Vec<SeriesPoint> {
    simulate(final_score, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_twelve_points_anchored() {
        let mut rng = StdRng::seed_from_u64(7);
        for score in [0.0, 0.3, 2.75, 5.5, 5.709523809523809, 9.6, 10.0] {
            let series = simulate(score, &mut rng);
            assert_eq!(series.len(), HISTORY_LEN);
            assert_eq!(series[11].value.to_bits(), score.to_bits());
            for (i, p) in series.iter().enumerate() {
                assert_eq!(p.index, i);
                assert!((0.0..=10.0).contains(&p.value), "{} out of range", p.value);
            }
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = simulate(6.2, &mut StdRng::seed_from_u64(42));
        let b = simulate(6.2, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ_only_before_anchor() {
        let a = simulate(6.2, &mut StdRng::seed_from_u64(1));
        let b = simulate(6.2, &mut StdRng::seed_from_u64(2));
        assert_eq!(a[11], b[11]);
        assert!(a[..11].iter().zip(&b[..11]).any(|(x, y)| x.value != y.value));
    }

    #[test]
    fn test_wobble_is_bounded() {
        let score = 5.0;
        let floor = 4.0;
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let series = simulate(score, &mut rng);
            for p in &series[..11] {
                let trend = floor + (p.index as f64 / 11.0) * (score - floor);
                assert!((p.value - trend).abs() <= HISTORY_JITTER + 1e-12);
            }
        }
    }

    #[test]
    fn test_zero_score_clamps_low_side() {
        let mut rng = StdRng::seed_from_u64(3);
        let series = simulate(0.0, &mut rng);
        for p in &series[..11] {
            assert!(p.value >= 0.0 && p.value <= HISTORY_JITTER);
        }
        assert_eq!(series[11].value, 0.0);
    }

    #[test]
    fn test_band() {
        assert_eq!(history_band(5.5), HistoryBand { floor: 4.5, ceiling: 6.5 });
        assert_eq!(history_band(0.5), HistoryBand { floor: 0.0, ceiling: 1.5 });
        assert_eq!(history_band(9.5), HistoryBand { floor: 8.5, ceiling: 10.0 });
    }

    #[test]
    fn test_unseeded_shape() {
        let series = simulate_unseeded(7.1);
        assert_eq!(series.len(), 12);
        assert_eq!(series[11].value, 7.1);
    }
}
