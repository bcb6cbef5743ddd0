//! Core data types for matcher results

use serde::{Deserialize, Serialize};

/// A canonical identifier split into its brand and model parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandModel {
    pub brand: String,
    pub model: String, // may itself contain underscores
}

/// Outcome of the brand/model extraction step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub brand: Option<String>,
    pub remainder: String,
}

/// Per-candidate score breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub identifier: String,
    pub brand_score: f64,
    pub model_score: f64,
    pub sequence_score: f64,
    pub composite: f64, // 0-100
}

/// Best match for a single query
///
/// `best_match` is `None` when there was nothing to score against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub best_match: Option<String>,
    pub confidence: f64,
}

impl BrandModel {
    pub fn new(brand: String, model: String) -> Self {
        Self { brand, model }
    }

    /// Identifier with underscores shown as spaces, e.g. `ford figo`
    pub fn display_form(&self) -> String {
        format!("{} {}", self.brand, self.model.replace('_', " "))
    }
}

impl Extraction {
    pub fn unresolved(input: &str) -> Self {
        Self {
            brand: None,
            remainder: input.to_string(),
        }
    }
}

impl MatchResult {
    /// The no-match sentinel
    pub fn none() -> Self {
        Self {
            best_match: None,
            confidence: 0.0,
        }
    }
}
