use super::{ConfigError, TaxonomyError};

/// Top-level error. Aggregates the per-concern errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum NormalizerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("taxonomy error: {0}")]
    Taxonomy(#[from] TaxonomyError),
}

pub type NormalizerResult<T> = Result<T, NormalizerError>;
