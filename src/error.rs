use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("identifier {identifier:?} has no '_' between brand and model")]
    MissingSeparator { identifier: String },
    #[error("identifier {identifier:?} has an empty {part}")]
    EmptySegment {
        identifier: String,
        part: &'static str,
    },
    #[error("identifier {identifier:?} has a {part} that is not lowercase single-spaced text")]
    NotNormalized {
        identifier: String,
        part: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for weight {field}: {value}")]
    InvalidWeight { field: &'static str, value: f64 },
    #[error("weights must sum to 1.0, got {sum}")]
    WeightSum { sum: f64 },
    #[error("precision {0} is out of range (max 6)")]
    Precision(u32),
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum MatcherError {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
