//! Pure wine quality scoring logic for VinoScore.
//!
//! This crate holds every computation behind the prediction page. Functions
//! take plain data and return plain data, so the same results can be shown by
//! a browser front end, checked by the headless harness, or unit tested.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Scored attributes: weight, valid range, optimal value |
//! | [`comparison`] | Side-by-side comparison of two wines |
//! | [`config`] | Catalog + sweep plans, JSON loading and validation |
//! | [`engine`] | Record → 0–10 quality score, with per-feature breakdown |
//! | [`history`] | Synthetic 12-point trend ending at the current score |
//! | [`profile`] | Feature profile bars and importance table |
//! | [`quality`] | Display rounding and quality tiers |
//! | [`record`] | The eleven-attribute chemistry record |
//! | [`report`] | One-call analysis bundling everything above |
//! | [`sweep`] | Single-attribute sensitivity sweeps for response curves |

pub mod catalog;
pub mod comparison;
pub mod config;
pub mod engine;
pub mod history;
pub mod profile;
pub mod quality;
pub mod record;
pub mod report;
pub mod sweep;

pub use catalog::{Feature, FeatureCatalog, FeatureSpec};
pub use engine::score;
pub use history::simulate;
pub use record::ChemistryRecord;
pub use sweep::sweep;
