//! The relationship-type registry: an insertion-ordered, immutable table of
//! [`TypeEntry`] values keyed by lookup key.

mod builder;
mod consistency;

use std::collections::HashMap;

use relnorm_core::models::{Category, RegistryStats, Taxonomy, TypeEntry};

pub use builder::normalize_key;

/// Immutable registry built from a [`Taxonomy`].
///
/// Iteration order is construction order: canonical entries first, then
/// variants, each in declared order. The substring and fuzzy stages of the
/// matcher depend on this order for tie-breaks.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    entries: Vec<TypeEntry>,
    index: HashMap<String, usize>,
    categories: Vec<Category>,
    stats: RegistryStats,
    version: String,
}

impl TypeRegistry {
    /// Build a registry from a taxonomy. Never fails: inconsistent data is skipped.
    pub fn build(taxonomy: &Taxonomy) -> Self {
        builder::build(taxonomy)
    }

    /// Exact lookup by (already normalized) lookup key.
    pub fn get(&self, lookup_key: &str) -> Option<&TypeEntry> {
        self.index.get(lookup_key).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, lookup_key: &str) -> bool {
        self.index.contains_key(lookup_key)
    }

    /// Entries in construction order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeEntry> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All lookup keys in construction order.
    pub fn lookup_keys(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.lookup_key.as_str()).collect()
    }

    /// Lookup keys of bidirectional entries, in construction order.
    pub fn bidirectional_keys(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.bidirectional)
            .map(|e| e.lookup_key.as_str())
            .collect()
    }

    /// `(lookup_key, inverse_key)` for every entry with an inverse.
    pub fn inverse_pairs(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .filter_map(|e| {
                e.inverse_key
                    .as_deref()
                    .map(|inv| (e.lookup_key.as_str(), inv))
            })
            .collect()
    }

    /// Distinct canonical identifiers in first-seen order.
    pub fn canonical_ids(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.entries
            .iter()
            .map(|e| e.canonical_id.as_str())
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Members of a category (case-insensitive name). Empty for unknown names.
    pub fn category(&self, name: &str) -> &[String] {
        self.categories
            .iter()
            .find(|c| c.is_named(name))
            .map(|c| c.keys.as_slice())
            .unwrap_or(&[])
    }

    /// Category names in declared order.
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn stats(&self) -> &RegistryStats {
        &self.stats
    }

    /// Version string of the taxonomy this registry was built from.
    pub fn version(&self) -> &str {
        &self.version
    }
}
