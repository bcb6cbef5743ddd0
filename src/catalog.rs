//! Catalog index - brand to model lookup built from canonical identifiers

use ahash::AHashMap;
use tracing::debug;

use crate::error::CatalogError;
use crate::normalize::normalize_text;
use crate::types::BrandModel;

/// Split a canonical identifier on its FIRST underscore
///
/// `hyundai_grand_i10` becomes (`hyundai`, `grand_i10`). Both parts must
/// already be in normalized form, otherwise no normalized input could ever
/// reach them.
pub fn split_identifier(identifier: &str) -> Result<BrandModel, CatalogError> {
    let (brand, model) =
        identifier
            .split_once('_')
            .ok_or_else(|| CatalogError::MissingSeparator {
                identifier: identifier.to_string(),
            })?;

    for (part, text) in [("brand", brand), ("model", model)] {
        if text.is_empty() {
            return Err(CatalogError::EmptySegment {
                identifier: identifier.to_string(),
                part,
            });
        }
    }

    if normalize_text(brand) != brand {
        return Err(CatalogError::NotNormalized {
            identifier: identifier.to_string(),
            part: "brand",
        });
    }
    // Underscores separate model words and are compared as spaces
    let model_words = model.replace('_', " ");
    if normalize_text(&model_words) != model_words {
        return Err(CatalogError::NotNormalized {
            identifier: identifier.to_string(),
            part: "model",
        });
    }

    Ok(BrandModel::new(brand.to_string(), model.to_string()))
}

/// Immutable index over a fixed list of canonical identifiers
///
/// Brands and their entries keep the order in which they first appear.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    identifiers: Vec<String>,
    entries: Vec<BrandModel>,
    brands: Vec<String>,
    positions_by_brand: AHashMap<String, Vec<usize>>,
    max_brand_words: usize,
}

impl CatalogIndex {
    pub fn new<I, S>(identifiers: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = Self::default();

        for identifier in identifiers {
            let identifier = identifier.into();
            let entry = split_identifier(&identifier)?;
            let position = index.entries.len();

            match index.positions_by_brand.get_mut(&entry.brand) {
                Some(positions) => positions.push(position),
                None => {
                    let words = entry.brand.split_whitespace().count();
                    index.max_brand_words = index.max_brand_words.max(words);
                    index.brands.push(entry.brand.clone());
                    index
                        .positions_by_brand
                        .insert(entry.brand.clone(), vec![position]);
                }
            }

            index.identifiers.push(identifier);
            index.entries.push(entry);
        }

        debug!(
            identifiers = index.identifiers.len(),
            brands = index.brands.len(),
            "catalog index built"
        );
        Ok(index)
    }

    /// Identifiers paired with their split form, in catalog order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &BrandModel)> {
        self.identifiers
            .iter()
            .map(String::as_str)
            .zip(self.entries.iter())
    }

    /// Entries belonging to one brand, in catalog order
    pub fn entries_for<'a>(
        &'a self,
        brand: &str,
    ) -> impl Iterator<Item = (&'a str, &'a BrandModel)> + 'a {
        let positions: &'a [usize] = self
            .positions_by_brand
            .get(brand)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        positions
            .iter()
            .map(move |&i| (self.identifiers[i].as_str(), &self.entries[i]))
    }

    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    pub fn contains_brand(&self, brand: &str) -> bool {
        self.positions_by_brand.contains_key(brand)
    }

    /// Word count of the longest brand key
    pub fn max_brand_words(&self) -> usize {
        self.max_brand_words
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_first_underscore() {
        let entry = split_identifier("maruti_vitara_brezza").unwrap();
        assert_eq!(entry.brand, "maruti");
        assert_eq!(entry.model, "vitara_brezza");
    }

    #[test]
    fn test_split_missing_separator() {
        let err = split_identifier("tesla").unwrap_err();
        assert_eq!(
            err,
            CatalogError::MissingSeparator {
                identifier: "tesla".to_string()
            }
        );
    }

    #[test]
    fn test_split_empty_parts() {
        assert!(matches!(
            split_identifier("_figo"),
            Err(CatalogError::EmptySegment { part: "brand", .. })
        ));
        assert!(matches!(
            split_identifier("ford_"),
            Err(CatalogError::EmptySegment { part: "model", .. })
        ));
    }

    #[test]
    fn test_split_rejects_unnormalized_parts() {
        assert_eq!(
            split_identifier("Ford_Figo"),
            Err(CatalogError::NotNormalized {
                identifier: "Ford_Figo".to_string(),
                part: "brand",
            })
        );
        assert!(matches!(
            split_identifier(" ford_figo"),
            Err(CatalogError::NotNormalized { part: "brand", .. })
        ));
        assert!(matches!(
            split_identifier("land  rover_defender"),
            Err(CatalogError::NotNormalized { part: "brand", .. })
        ));
        assert!(matches!(
            split_identifier("ford_Figo"),
            Err(CatalogError::NotNormalized { part: "model", .. })
        ));
        assert!(matches!(
            split_identifier("honda_wr-v"),
            Err(CatalogError::NotNormalized { part: "model", .. })
        ));
    }

    #[test]
    fn test_split_keeps_model_underscores() {
        let entry = split_identifier("toyota_innova_crysta").unwrap();
        assert_eq!(entry.model, "innova_crysta");
        assert!(split_identifier("land rover_range_rover").is_ok());
    }

    #[test]
    fn test_unknown_brand_has_no_entries() {
        let index = CatalogIndex::new(["ford_figo"]).unwrap();
        assert_eq!(index.entries_for("honda").count(), 0);
    }

    #[test]
    fn test_index_keeps_insertion_order() {
        let index = CatalogIndex::new([
            "honda_city",
            "ford_figo",
            "honda_amaze",
            "honda_wr_v",
        ])
        .unwrap();

        assert_eq!(index.brands(), ["honda", "ford"]);
        let honda: Vec<&str> = index.entries_for("honda").map(|(id, _)| id).collect();
        assert_eq!(honda, ["honda_city", "honda_amaze", "honda_wr_v"]);
        let models: Vec<&str> = index
            .entries_for("honda")
            .map(|(_, entry)| entry.model.as_str())
            .collect();
        assert_eq!(models, ["city", "amaze", "wr_v"]);
        assert_eq!(index.len(), 4);
        assert_eq!(index.max_brand_words(), 1);
    }

    #[test]
    fn test_index_rejects_whole_catalog_on_bad_entry() {
        let result = CatalogIndex::new(["ford_figo", "nobrand"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_multi_word_brand() {
        let index = CatalogIndex::new(["land_cruiser", "land rover_defender"]).unwrap();
        assert!(index.contains_brand("land rover"));
        assert!(index.contains_brand("land"));
        assert_eq!(index.max_brand_words(), 2);
        assert_eq!(index.entries_for("land rover").count(), 1);
    }

    #[test]
    fn test_empty_index() {
        let index = CatalogIndex::new(Vec::<String>::new()).unwrap();
        assert!(index.is_empty());
        assert_eq!(index.entries_for("ford").count(), 0);
        assert_eq!(index.max_brand_words(), 0);
    }
}
