//! Scoring configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default weights for the composite score
pub const BRAND_WEIGHT: f64 = 0.3;
pub const MODEL_WEIGHT: f64 = 0.5;
pub const SEQUENCE_WEIGHT: f64 = 0.2;

/// Decimal places kept in reported confidences
pub const DEFAULT_PRECISION: u32 = 2;

const MAX_PRECISION: u32 = 6;
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub brand: f64,
    pub model: f64,
    pub sequence: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            brand: BRAND_WEIGHT,
            model: MODEL_WEIGHT,
            sequence: SEQUENCE_WEIGHT,
        }
    }
}

impl ScoringWeights {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("brand", self.brand),
            ("model", self.model),
            ("sequence", self.sequence),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { field, value });
            }
        }

        // Composite scores stay within 0-100 only if the weights are a convex combination
        let sum = self.brand + self.model + self.sequence;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSum { sum });
        }
        Ok(())
    }
}

/// Matcher settings
///
/// Every field is optional in JSON; missing fields fall back to the defaults:
///
/// ```json
/// { "weights": { "brand": 0.3, "model": 0.5, "sequence": 0.2 }, "precision": 2 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    pub weights: ScoringWeights,
    pub precision: u32,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl MatcherConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: MatcherConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::Precision(self.precision));
        }
        Ok(())
    }

    /// Round a score to the configured number of decimal places
    pub fn round(&self, score: f64) -> f64 {
        let factor = 10f64.powi(self.precision as i32);
        (score * factor).round() / factor
    }
}
