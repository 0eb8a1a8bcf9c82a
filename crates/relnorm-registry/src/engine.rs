//! RelationshipNormalizer: the registry plus a matcher behind one shareable handle.

use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;
use relnorm_core::config::{MatchingConfig, NormalizerConfig};
use relnorm_core::constants::FALLBACK_LOOKUP_KEY;
use relnorm_core::errors::NormalizerResult;
use relnorm_core::models::{Classification, Taxonomy, TypeEntry, Validation};
use relnorm_core::traits::IRelationshipClassifier;
use tracing::{debug, info};

use crate::matching::Matcher;
use crate::registry::TypeRegistry;
use crate::taxonomy;

/// Classifies relationship labels against an immutable registry.
///
/// Cheap to share: the registry sits behind an `Arc` and nothing is mutated
/// after construction, so one instance can serve any number of threads.
///
/// ```
/// use relnorm_registry::RelationshipNormalizer;
///
/// let normalizer = RelationshipNormalizer::builtin();
/// assert_eq!(normalizer.classify("makes request to").canonical_id, "CALLS_API");
/// assert_eq!(normalizer.classify("").canonical_id, "RELATED");
/// ```
#[derive(Debug, Clone)]
pub struct RelationshipNormalizer {
    registry: Arc<TypeRegistry>,
    matcher: Arc<Matcher>,
}

impl RelationshipNormalizer {
    pub fn new(registry: Arc<TypeRegistry>, matcher: Matcher) -> Self {
        Self {
            registry,
            matcher: Arc::new(matcher),
        }
    }

    /// Built-in taxonomy with default matching settings.
    pub fn builtin() -> Self {
        Self::with_taxonomy(&taxonomy::builtin(), &MatchingConfig::default())
    }

    pub fn with_taxonomy(taxonomy: &Taxonomy, matching: &MatchingConfig) -> Self {
        Self::new(Arc::new(TypeRegistry::build(taxonomy)), Matcher::new(matching))
    }

    /// Build from configuration, loading the taxonomy file when one is configured.
    pub fn from_config(config: &NormalizerConfig) -> NormalizerResult<Self> {
        let taxonomy = match &config.taxonomy.path {
            Some(path) => {
                info!(path = %path, "loading relationship taxonomy");
                Taxonomy::from_file(Path::new(path))?
            }
            None => taxonomy::builtin(),
        };
        Ok(Self::with_taxonomy(&taxonomy, &config.matching))
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Canonical identifier plus match details for one label.
    pub fn classify(&self, label: &str) -> Classification {
        let classification = self.matcher.classify(&self.registry, label);
        debug!(
            label,
            canonical_id = %classification.canonical_id,
            kind = %classification.kind,
            "classified relationship type"
        );
        classification
    }

    /// Canonical identifier only.
    pub fn canonical_id(&self, label: &str) -> String {
        self.classify(label).canonical_id
    }

    /// Classify many labels in parallel. Output order follows input order.
    pub fn classify_batch<S>(&self, labels: &[S]) -> Vec<Classification>
    where
        S: AsRef<str> + Sync,
    {
        labels
            .par_iter()
            .map(|label| self.matcher.classify(&self.registry, label.as_ref()))
            .collect()
    }

    /// Registry metadata for a label, or a synthesized record when nothing matched.
    pub fn get_metadata(&self, label: &str) -> TypeEntry {
        let classification = self.classify(label);
        match classification.entry {
            Some(entry) => entry,
            None => TypeEntry::synthesized(label, classification.canonical_id),
        }
    }

    /// `is_valid` only for exact registry keys; otherwise suggest the closest key.
    pub fn validate(&self, label: &str) -> Validation {
        if label.trim().is_empty() {
            return Validation::invalid(Some(FALLBACK_LOOKUP_KEY.to_string()));
        }
        let lowered = label.to_lowercase();
        if self.registry.contains(&lowered) {
            return Validation::valid();
        }
        let suggestion = self
            .matcher
            .closest(&self.registry, &lowered)
            .map(|m| m.entry.lookup_key.clone());
        Validation::invalid(suggestion)
    }

    /// Every lookup key, in construction order.
    pub fn list_all_types(&self) -> Vec<&str> {
        self.registry.lookup_keys()
    }

    pub fn list_bidirectional_types(&self) -> Vec<&str> {
        self.registry.bidirectional_keys()
    }

    pub fn list_inverse_pairs(&self) -> Vec<(&str, &str)> {
        self.registry.inverse_pairs()
    }

    /// Lookup keys in a category; empty for unknown names.
    pub fn list_category(&self, name: &str) -> &[String] {
        self.registry.category(name)
    }

    pub fn list_categories(&self) -> Vec<&str> {
        self.registry.category_names()
    }

    /// Registry entry for an exact lookup key.
    pub fn get_entry(&self, lookup_key: &str) -> Option<&TypeEntry> {
        self.registry.get(lookup_key)
    }
}

impl Default for RelationshipNormalizer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl IRelationshipClassifier for RelationshipNormalizer {
    fn classify(&self, label: &str) -> Classification {
        RelationshipNormalizer::classify(self, label)
    }

    fn get_metadata(&self, label: &str) -> TypeEntry {
        RelationshipNormalizer::get_metadata(self, label)
    }

    fn validate(&self, label: &str) -> Validation {
        RelationshipNormalizer::validate(self, label)
    }
}
