/// Errors raised while loading an external taxonomy file.
#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    #[error("failed to read taxonomy {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("failed to parse taxonomy {source_name}: {message}")]
    ParseError {
        source_name: String,
        message: String,
    },

    #[error("taxonomy defines no canonical relationship types")]
    EmptyTaxonomy,
}
