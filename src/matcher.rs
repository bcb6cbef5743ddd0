//! Vehicle matcher - scores noisy descriptions against the canonical catalog

use tracing::{debug, trace};

use crate::catalog::CatalogIndex;
use crate::config::MatcherConfig;
use crate::error::MatcherError;
use crate::extractor::BrandExtractor;
use crate::normalize::Normalizer;
use crate::similarity::{edit_ratio, partial_ratio, sequence_ratio};
use crate::types::{BrandModel, Extraction, MatchResult, ScoredCandidate};

/// Maps free-text vehicle descriptions to `brand_model` identifiers
///
/// The catalog index is built once in the constructor and never mutated, so
/// one matcher can be shared by reference across threads.
pub struct VehicleMatcher {
    catalog: CatalogIndex,
    normalizer: Normalizer,
    extractor: BrandExtractor,
    config: MatcherConfig,
}

impl VehicleMatcher {
    pub fn new<I, S>(identifiers: I) -> Result<Self, MatcherError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(identifiers, MatcherConfig::default())
    }

    pub fn with_config<I, S>(identifiers: I, config: MatcherConfig) -> Result<Self, MatcherError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        config.validate()?;
        let catalog = CatalogIndex::new(identifiers)?;

        Ok(Self {
            catalog,
            normalizer: Normalizer::new(),
            extractor: BrandExtractor::new(),
            config,
        })
    }

    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn normalize(&self, input: &str) -> String {
        self.normalizer.normalize(input)
    }

    pub fn extract(&self, normalized: &str) -> Extraction {
        self.extractor.extract(normalized, &self.catalog)
    }

    /// Best canonical identifier for `input` with its confidence (0-100)
    ///
    /// Ties keep the candidate that appears first in the catalog. Returns the
    /// no-match sentinel only when there is nothing to score against.
    pub fn best_match(&self, input: &str) -> MatchResult {
        let mut best: Option<ScoredCandidate> = None;

        for scored in self.score_all(input) {
            let better = match &best {
                Some(current) => scored.composite > current.composite,
                None => true,
            };
            if better {
                best = Some(scored);
            }
        }

        match best {
            Some(winner) => {
                debug!(
                    input = %input,
                    best_match = %winner.identifier,
                    score = winner.composite,
                    "match selected"
                );
                MatchResult {
                    best_match: Some(winner.identifier),
                    confidence: self.config.round(winner.composite),
                }
            }
            None => {
                debug!(input = %input, "no candidates to score");
                MatchResult::none()
            }
        }
    }

    /// Every candidate scored and sorted best first, cut to `limit` entries
    pub fn rank(&self, input: &str, limit: usize) -> Vec<ScoredCandidate> {
        let mut scored = self.score_all(input);

        // Stable sort keeps catalog order among equal scores
        scored.sort_by(|a, b| {
            b.composite
                .partial_cmp(&a.composite)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(limit);

        for candidate in &mut scored {
            candidate.composite = self.config.round(candidate.composite);
        }
        scored
    }

    fn score_all(&self, input: &str) -> Vec<ScoredCandidate> {
        let normalized = self.normalizer.normalize(input);
        let extraction = self.extract(&normalized);

        // Without a brand the model is looked for anywhere in the input
        let model_target = match extraction.brand {
            Some(_) => extraction.remainder.as_str(),
            None => normalized.as_str(),
        };

        let candidates: Vec<(&str, &BrandModel)> = match &extraction.brand {
            Some(brand) => self.catalog.entries_for(brand).collect(),
            None => self.catalog.entries().collect(),
        };

        candidates
            .into_iter()
            .map(|(identifier, entry)| {
                self.score_candidate(&normalized, model_target, identifier, entry)
            })
            .collect()
    }

    fn score_candidate(
        &self,
        normalized: &str,
        model_target: &str,
        identifier: &str,
        entry: &BrandModel,
    ) -> ScoredCandidate {
        let weights = &self.config.weights;

        let brand_words = entry.brand.split_whitespace().count().max(1);
        let leading = leading_tokens(normalized, brand_words);
        let brand_score = edit_ratio(&entry.brand, &leading);

        let model_score = partial_ratio(&entry.model.replace('_', " "), model_target);
        let sequence_score = sequence_ratio(normalized, &entry.display_form());

        let composite = (brand_score * weights.brand
            + model_score * weights.model
            + sequence_score * weights.sequence)
            * 100.0;
        let composite = composite.clamp(0.0, 100.0);

        trace!(
            candidate = %identifier,
            brand_score,
            model_score,
            sequence_score,
            composite,
            "candidate scored"
        );

        ScoredCandidate {
            identifier: identifier.to_string(),
            brand_score,
            model_score,
            sequence_score,
            composite,
        }
    }
}

/// First `count` whitespace-delimited tokens joined by single spaces
fn leading_tokens(normalized: &str, count: usize) -> String {
    normalized
        .split_whitespace()
        .take(count)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringWeights;
    use crate::error::CatalogError;

    fn matcher() -> VehicleMatcher {
        VehicleMatcher::new([
            "ford_aspire",
            "ford_figo",
            "honda_city",
            "honda_wr_v",
            "hyundai_grand_i10",
            "hyundai_i10",
        ])
        .unwrap()
    }

    #[test]
    fn test_exact_match() {
        let result = matcher().best_match("Ford Figo");
        assert_eq!(result.best_match.as_deref(), Some("ford_figo"));
        assert_eq!(result.confidence, 100.0);
    }

    #[test]
    fn test_model_with_underscore() {
        let result = matcher().best_match("HONDA WR-V VX");
        assert_eq!(result.best_match.as_deref(), Some("honda_wr_v"));
    }

    #[test]
    fn test_shorter_model_not_shadowed() {
        let m = matcher();
        assert_eq!(
            m.best_match("hyundai i10").best_match.as_deref(),
            Some("hyundai_i10")
        );
        assert_eq!(
            m.best_match("hyundai grand i10").best_match.as_deref(),
            Some("hyundai_grand_i10")
        );
    }

    #[test]
    fn test_brand_restricts_candidates() {
        let ranked = matcher().rank("honda something", 10);
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|c| c.identifier.starts_with("honda_")));
    }

    #[test]
    fn test_empty_catalog() {
        let m = VehicleMatcher::new(Vec::<String>::new()).unwrap();
        assert_eq!(m.best_match("ford figo"), MatchResult::none());
        assert!(m.rank("ford figo", 5).is_empty());
    }

    #[test]
    fn test_empty_input_still_answers() {
        let result = matcher().best_match("");
        assert_eq!(result.best_match.as_deref(), Some("ford_aspire"));
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_scores_in_range() {
        let m = matcher();
        for input in ["", "ford", "zzz qqq", "HONDA CITY 1.5 V MT", "i10 grand"] {
            for candidate in m.rank(input, usize::MAX) {
                assert!((0.0..=100.0).contains(&candidate.composite));
                assert!((0.0..=1.0).contains(&candidate.brand_score));
                assert!((0.0..=1.0).contains(&candidate.model_score));
                assert!((0.0..=1.0).contains(&candidate.sequence_score));
            }
        }
    }

    #[test]
    fn test_rank_sorted_and_limited() {
        let ranked = matcher().rank("figo", 3);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].identifier, "ford_figo");
        assert!(ranked.windows(2).all(|w| w[0].composite >= w[1].composite));
    }

    #[test]
    fn test_custom_weights_change_scores() {
        let config = MatcherConfig {
            weights: ScoringWeights {
                brand: 0.0,
                model: 1.0,
                sequence: 0.0,
            },
            ..MatcherConfig::default()
        };
        let m = VehicleMatcher::with_config(["ford_figo", "honda_city"], config).unwrap();
        let result = m.best_match("zz city");
        assert_eq!(result.best_match.as_deref(), Some("honda_city"));
        assert_eq!(result.confidence, 100.0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = MatcherConfig {
            precision: 12,
            ..MatcherConfig::default()
        };
        assert!(matches!(
            VehicleMatcher::with_config(["ford_figo"], config),
            Err(MatcherError::Config(_))
        ));
    }

    #[test]
    fn test_bad_identifier_rejected() {
        assert!(matches!(
            VehicleMatcher::new(["ford_figo", "figo"]),
            Err(MatcherError::Catalog(_))
        ));
    }

    #[test]
    fn test_uppercase_identifier_rejected() {
        assert!(matches!(
            VehicleMatcher::new(["Ford_Figo", "ford_aspire"]),
            Err(MatcherError::Catalog(CatalogError::NotNormalized { .. }))
        ));
        assert!(matches!(
            VehicleMatcher::new(["land  rover_defender", " ford_figo"]),
            Err(MatcherError::Catalog(CatalogError::NotNormalized { .. }))
        ));
    }

    #[test]
    fn test_leading_tokens() {
        assert_eq!(leading_tokens("land rover defender", 2), "land rover");
        assert_eq!(leading_tokens("ford", 2), "ford");
        assert_eq!(leading_tokens("", 1), "");
    }
}
