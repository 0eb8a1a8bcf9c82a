//! Registry construction.
//!
//! 1. canonical labels become entries keyed by their lower-cased, spaced form
//! 2. variant phrases become entries sharing their target's canonical id
//! 3. inverse pairs are linked in both directions
//!
//! The result is frozen inside [`TypeRegistry`].

use std::collections::{HashMap, HashSet};

use relnorm_core::models::{Category, EntryOrigin, RegistryStats, Taxonomy, TypeEntry};
use relnorm_core::sanitize::{is_valid_canonical_id, sanitize, to_lookup_key};
use tracing::{debug, info, warn};

use super::TypeRegistry;

/// Lower-case and collapse internal whitespace to single spaces.
pub fn normalize_key(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

struct RegistryBuilder {
    entries: Vec<TypeEntry>,
    index: HashMap<String, usize>,
    stats: RegistryStats,
}

impl RegistryBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            stats: RegistryStats::default(),
        }
    }

    fn insert(&mut self, entry: TypeEntry) {
        self.index.insert(entry.lookup_key.clone(), self.entries.len());
        self.entries.push(entry);
    }

    fn add_canonical(&mut self, label: &str, symmetric: &HashSet<String>) {
        let label = label.trim();
        if label.is_empty() {
            return;
        }
        let canonical_id = if is_valid_canonical_id(label) {
            label.to_string()
        } else {
            let id = sanitize(label);
            warn!(label, canonical_id = %id, "canonical label is not a valid identifier, sanitized");
            id
        };
        let lookup_key = normalize_key(&to_lookup_key(&canonical_id));
        if self.index.contains_key(&lookup_key) {
            debug!(lookup_key = %lookup_key, "duplicate canonical type, keeping first");
            return;
        }
        self.insert(TypeEntry {
            description: format!("Relationship type: {lookup_key}"),
            bidirectional: symmetric.contains(&lookup_key),
            lookup_key,
            canonical_id,
            inverse_key: None,
            origin: EntryOrigin::Canonical,
        });
    }

    fn add_variant(&mut self, phrase: &str, canonical: &str) {
        let lookup_key = normalize_key(phrase);
        if lookup_key.is_empty() || self.index.contains_key(&lookup_key) {
            return;
        }
        let target_key = normalize_key(&to_lookup_key(canonical));
        let Some(&target) = self.index.get(&target_key) else {
            debug!(variant = %lookup_key, canonical, "variant targets unknown canonical type, skipped");
            self.stats.skipped_variants += 1;
            return;
        };
        let target = &self.entries[target];
        let entry = TypeEntry {
            canonical_id: target.canonical_id.clone(),
            description: format!("Variant of {target_key}: {lookup_key}"),
            bidirectional: target.bidirectional,
            inverse_key: target.inverse_key.clone(),
            lookup_key,
            origin: EntryOrigin::Variant,
        };
        self.insert(entry);
    }

    fn link_inverse(&mut self, forward: &str, reverse: &str) {
        let forward = normalize_key(forward);
        let reverse = normalize_key(reverse);
        let (Some(&a), Some(&b)) = (self.index.get(&forward), self.index.get(&reverse)) else {
            debug!(%forward, %reverse, "inverse pair references unknown type, skipped");
            self.stats.skipped_inverse_pairs += 1;
            return;
        };
        // Detach previous partners so no stale one-way link survives an overwrite.
        self.unlink(a);
        self.unlink(b);
        self.entries[a].inverse_key = Some(reverse);
        self.entries[b].inverse_key = Some(forward);
    }

    fn unlink(&mut self, idx: usize) {
        let Some(old) = self.entries[idx].inverse_key.take() else {
            return;
        };
        if let Some(&partner) = self.index.get(&old) {
            let points_back =
                self.entries[partner].inverse_key.as_deref() == Some(self.entries[idx].lookup_key.as_str());
            if points_back {
                self.entries[partner].inverse_key = None;
            }
        }
    }

    fn finish(mut self, taxonomy: &Taxonomy) -> TypeRegistry {
        let stats = &mut self.stats;
        stats.total = self.entries.len();
        stats.canonical = self
            .entries
            .iter()
            .filter(|e| e.origin == EntryOrigin::Canonical)
            .count();
        stats.variants = stats.total - stats.canonical;
        stats.bidirectional = self.entries.iter().filter(|e| e.bidirectional).count();
        stats.inverse_links = self
            .entries
            .iter()
            .filter(|e| e.inverse_key.is_some())
            .count();

        let categories = taxonomy
            .categories
            .iter()
            .map(|c| Category {
                name: c.name.clone(),
                keys: c.keys.iter().map(|k| normalize_key(k)).collect(),
            })
            .collect();

        info!(
            version = %taxonomy.version,
            total = stats.total,
            canonical = stats.canonical,
            variants = stats.variants,
            inverse_links = stats.inverse_links,
            skipped_inverse_pairs = stats.skipped_inverse_pairs,
            "initialized relationship type registry"
        );

        TypeRegistry {
            entries: self.entries,
            index: self.index,
            categories,
            stats: self.stats,
            version: taxonomy.version.clone(),
        }
    }
}

pub(super) fn build(taxonomy: &Taxonomy) -> TypeRegistry {
    let symmetric: HashSet<String> = taxonomy
        .bidirectional
        .iter()
        .map(|k| normalize_key(k))
        .collect();

    let mut builder = RegistryBuilder::new();
    for label in &taxonomy.canonical_types {
        builder.add_canonical(label, &symmetric);
    }
    for variant in &taxonomy.variants {
        builder.add_variant(&variant.phrase, &variant.canonical);
    }
    for pair in &taxonomy.inverse_pairs {
        builder.link_inverse(&pair.forward, &pair.reverse);
    }
    builder.finish(taxonomy)
}
