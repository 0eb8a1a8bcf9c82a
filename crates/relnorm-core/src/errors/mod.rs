//! Error handling for relationship-type normalization.
//! One error enum per concern, `thiserror` only.
//!
//! Classification never fails; these errors only arise while loading
//! configuration or external taxonomy files.

pub mod config_error;
pub mod normalizer_error;
pub mod taxonomy_error;

pub use config_error::ConfigError;
pub use normalizer_error::{NormalizerError, NormalizerResult};
pub use taxonomy_error::TaxonomyError;
