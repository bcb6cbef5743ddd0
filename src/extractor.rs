//! Brand/model extraction from normalized input

use tracing::debug;

use crate::catalog::CatalogIndex;
use crate::types::Extraction;

/// Split a normalized input into a known brand and the remaining model text
///
/// Tries the longest word prefix first so a two-word brand such as
/// `land rover` wins over a one-word brand `land`.
pub struct BrandExtractor;

impl BrandExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, normalized: &str, catalog: &CatalogIndex) -> Extraction {
        let words: Vec<&str> = normalized.split_whitespace().collect();
        let longest = words.len().min(catalog.max_brand_words());

        for prefix_len in (1..=longest).rev() {
            let candidate = words[..prefix_len].join(" ");
            if catalog.contains_brand(&candidate) {
                let remainder = words[prefix_len..].join(" ");
                debug!(brand = %candidate, remainder = %remainder, "brand resolved");
                return Extraction {
                    brand: Some(candidate),
                    remainder,
                };
            }
        }

        debug!(input = %normalized, "no brand prefix found");
        Extraction::unresolved(normalized)
    }
}

impl Default for BrandExtractor {
    fn default() -> Self {
        Self::new()
    }
}
