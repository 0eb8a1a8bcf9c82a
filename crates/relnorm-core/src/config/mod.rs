//! Configuration for the normalizer.
//! TOML-based, resolution order: env > file > defaults.

pub mod defaults;
pub mod matching_config;
pub mod normalizer_config;
pub mod observability_config;
pub mod taxonomy_config;

pub use matching_config::{MatchingConfig, ScorerKind};
pub use normalizer_config::NormalizerConfig;
pub use observability_config::ObservabilityConfig;
pub use taxonomy_config::TaxonomyConfig;
