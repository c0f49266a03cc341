//! Single-feature sensitivity sweeps for response-curve charts.
//!
//! A sweep holds a base record fixed, replaces one attribute with each value
//! of an evenly spaced [`SweepGrid`], and scores every derived record. The
//! resulting [`CurvePoint`]s are what the quality-vs-attribute charts plot.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Feature, FeatureCatalog};
use crate::engine::score_with;
use crate::record::ChemistryRecord;

/// Slack for the point count so `(1.3 − 0.1) / 0.02` lands on 60, not 59.
const GRID_EPSILON: f64 = 1e-9;

/// Upper bound on points in one grid.
pub const MAX_GRID_POINTS: usize = 10_000;

/// Alcohol from 8 % to 15 % in quarter-percent steps (29 points).
pub const ALCOHOL_GRID: SweepGrid = SweepGrid {
    start: 8.0,
    stop: 15.0,
    step: 0.25,
};

/// Volatile acidity from 0.1 to 1.3 g/L in 0.02 steps (61 points).
pub const VOLATILE_ACIDITY_GRID: SweepGrid = SweepGrid {
    start: 0.1,
    stop: 1.3,
    step: 0.02,
};

/// Raw grid bounds as they appear in configuration files.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GridBounds {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

/// An ascending, evenly spaced, inclusive range of values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridBounds")]
pub struct SweepGrid {
    start: f64,
    stop: f64,
    step: f64,
}

impl SweepGrid {
    pub fn new(start: f64, stop: f64, step: f64) -> Result<Self, GridError> {
        if !(start.is_finite() && stop.is_finite() && step.is_finite()) {
            return Err(GridError::NonFinite);
        }
        if step <= 0.0 {
            return Err(GridError::NonPositiveStep(step));
        }
        if stop < start {
            return Err(GridError::Descending { start, stop });
        }
        let intervals = (stop - start) / step + GRID_EPSILON;
        if !intervals.is_finite() || intervals >= MAX_GRID_POINTS as f64 {
            // `as` saturates, so huge and infinite counts report usize::MAX
            let points = (intervals.floor() as usize).saturating_add(1);
            return Err(GridError::TooManyPoints(points));
        }
        Ok(Self { start, stop, step })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn stop(&self) -> f64 {
        self.stop
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// `floor((stop − start) / step) + 1`.
    pub fn len(&self) -> usize {
        ((self.stop - self.start) / self.step + GRID_EPSILON).floor() as usize + 1
    }

    /// Always false; a valid grid holds at least `start`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The `i`-th grid value, computed as `start + i × step`.
    pub fn value_at(&self, i: usize) -> f64 {
        self.start + i as f64 * self.step
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.value_at(i))
    }
}

impl TryFrom<GridBounds> for SweepGrid {
    type Error = GridError;

    fn try_from(b: GridBounds) -> Result<Self, Self::Error> {
        SweepGrid::new(b.start, b.stop, b.step)
    }
}

/// Reasons a grid is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    NonFinite,
    NonPositiveStep(f64),
    Descending { start: f64, stop: f64 },
    TooManyPoints(usize),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::NonFinite => write!(f, "grid bounds must be finite"),
            GridError::NonPositiveStep(step) => write!(f, "grid step must be positive, got {}", step),
            GridError::Descending { start, stop } => {
                write!(f, "grid stop {} is below start {}", stop, start)
            }
            GridError::TooManyPoints(n) => {
                write!(f, "grid has {} points, limit is {}", n, MAX_GRID_POINTS)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// One sample on a response curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Swept attribute value.
    pub x: f64,
    /// Score at that value.
    pub y: f64,
}

/// Score `base` with `feature` set to every value of `grid`, using the
/// built-in catalog.
pub fn sweep(base: &ChemistryRecord, feature: Feature, grid: &SweepGrid) -> Vec<CurvePoint> {
    sweep_with(FeatureCatalog::standard(), base, feature, grid)
}

/// [`sweep`] against an explicit catalog.
pub fn sweep_with(
    catalog: &FeatureCatalog,
    base: &ChemistryRecord,
    feature: Feature,
    grid: &SweepGrid,
) -> Vec<CurvePoint> {
    grid.values()
        .map(|x| CurvePoint {
            x,
            y: score_with(catalog, &base.with(feature, x)),
        })
        .collect()
}

/// Which attribute to sweep and over what grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPlan {
    pub feature: Feature,
    pub grid: SweepGrid,
}

/// The two curves the trends panel draws: alcohol, then volatile acidity.
pub fn standard_plans() -> Vec<SweepPlan> {
    vec![
        SweepPlan {
            feature: Feature::Alcohol,
            grid: ALCOHOL_GRID,
        },
        SweepPlan {
            feature: Feature::VolatileAcidity,
            grid: VOLATILE_ACIDITY_GRID,
        },
    ]
}

/// A labelled curve ready for a chart renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub feature: Feature,
    /// Optimal value for the dashed marker line, if the feature is scored.
    pub optimal: Option<f64>,
    /// Where the current wine sits on the chart.
    pub current: CurvePoint,
    pub points: Vec<CurvePoint>,
}

/// Run a plan and attach the chart annotations.
///
/// `current_score` is the score the result card displays; it positions the
/// highlighted marker and may differ slightly from the curve's own value at
/// the record's attribute.
pub fn build_curve(
    catalog: &FeatureCatalog,
    base: &ChemistryRecord,
    plan: &SweepPlan,
    current_score: f64,
) -> Curve {
    Curve {
        feature: plan.feature,
        optimal: catalog.get(plan.feature).map(|s| s.optimal),
        current: CurvePoint {
            x: base.get(plan.feature),
            y: current_score,
        },
        points: sweep_with(catalog, base, plan.feature, &plan.grid),
    }
}
