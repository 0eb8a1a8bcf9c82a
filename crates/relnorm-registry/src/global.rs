//! Process-wide default normalizer over the built-in taxonomy.
//!
//! Built on first use; concurrent first callers block on the same
//! initialization instead of racing to build duplicates.

use std::sync::OnceLock;

use relnorm_core::models::Classification;

use crate::engine::RelationshipNormalizer;
use crate::registry::TypeRegistry;
use crate::taxonomy;

static DEFAULT_NORMALIZER: OnceLock<RelationshipNormalizer> = OnceLock::new();

/// Build a fresh registry from the compiled-in taxonomy.
pub fn build_registry() -> TypeRegistry {
    TypeRegistry::build(&taxonomy::builtin())
}

/// Shared normalizer with the built-in taxonomy and default matching.
pub fn default_normalizer() -> &'static RelationshipNormalizer {
    DEFAULT_NORMALIZER.get_or_init(RelationshipNormalizer::builtin)
}

/// Classify with the shared default normalizer.
pub fn classify(label: &str) -> Classification {
    default_normalizer().classify(label)
}
