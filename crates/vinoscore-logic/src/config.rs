//! Analytics configuration — catalog and sweep plans, loadable from JSON.
//!
//! ```
//! use vinoscore_logic::config::{validate_config, AnalyticsConfig};
//!
//! let config = AnalyticsConfig::default();
//! assert!(validate_config(&config).is_empty());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Feature, FeatureCatalog};
use crate::sweep::{standard_plans, SweepPlan};

/// Everything the analysis pipeline needs besides the record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub catalog: FeatureCatalog,
    /// Response curves to draw, in display order.
    pub sweeps: Vec<SweepPlan>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            catalog: FeatureCatalog::standard().clone(),
            sweeps: standard_plans(),
        }
    }
}

impl AnalyticsConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigLoadError> {
        let config: AnalyticsConfig = serde_json::from_str(json)?;
        let errors = validate_config(&config);
        if !errors.is_empty() {
            log::warn!("Rejected analytics config: {} problem(s)", errors.len());
            return Err(ConfigLoadError::Invalid(errors));
        }
        log::debug!(
            "Loaded analytics config: {} scored features, {} sweeps",
            config.catalog.len(),
            config.sweeps.len()
        );
        Ok(config)
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No response curves requested.
    NoSweeps,
    /// Same attribute swept twice.
    DuplicateSweep(Feature),
    /// Sweeping an attribute the catalog ignores draws a flat line.
    UnscoredSweep(Feature),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoSweeps => write!(f, "no sweeps configured"),
            ConfigError::DuplicateSweep(feat) => write!(f, "{} is swept more than once", feat),
            ConfigError::UnscoredSweep(feat) => {
                write!(f, "{} is swept but not scored by the catalog", feat)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Validate a configuration, returning all errors found.
///
/// Catalog and grid contents are already checked when they are built or
/// deserialized; this covers how they fit together.
pub fn validate_config(config: &AnalyticsConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if config.sweeps.is_empty() {
        errors.push(ConfigError::NoSweeps);
    }
    for (i, plan) in config.sweeps.iter().enumerate() {
        if config.sweeps[..i].iter().any(|p| p.feature == plan.feature) {
            errors.push(ConfigError::DuplicateSweep(plan.feature));
        }
        if !config.catalog.is_scored(plan.feature) {
            errors.push(ConfigError::UnscoredSweep(plan.feature));
        }
    }

    errors
}

/// Failure to load a configuration file.
#[derive(Debug)]
pub enum ConfigLoadError {
    /// Malformed JSON, or a catalog or grid that failed its own checks.
    Parse(serde_json::Error),
    Invalid(Vec<ConfigError>),
}

impl From<serde_json::Error> for ConfigLoadError {
    fn from(e: serde_json::Error) -> Self {
        ConfigLoadError::Parse(e)
    }
}

impl fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigLoadError::Parse(e) => write!(f, "config parse error: {}", e),
            ConfigLoadError::Invalid(errors) => {
                let parts: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                write!(f, "invalid config: {}", parts.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigLoadError::Parse(e) => Some(e),
            ConfigLoadError::Invalid(_) => None,
        }
    }
}
