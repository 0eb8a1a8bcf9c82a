//! # relnorm-core
//!
//! Foundation crate for relationship-type normalization.
//! Defines the data model, traits, errors, config, constants, and the
//! identifier sanitizer. The registry and matcher crates build on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod sanitize;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::NormalizerConfig;
pub use errors::{NormalizerError, NormalizerResult};
pub use models::{Category, Classification, MatchKind, Taxonomy, TypeEntry, Validation};
pub use sanitize::sanitize;
