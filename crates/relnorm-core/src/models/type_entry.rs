use serde::{Deserialize, Serialize};

/// Which construction step produced a registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryOrigin {
    /// Derived from a canonical taxonomy label.
    Canonical,
    /// Alias phrase pointing at a canonical label.
    Variant,
    /// Not in the registry; built for an unmatched label.
    Synthesized,
}

/// One relationship type known to the registry.
///
/// Several lookup keys may share a `canonical_id` (a canonical form and its variants).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEntry {
    /// Lower-case, space-separated label. Unique within a registry.
    pub lookup_key: String,
    /// Graph-store identifier, `[A-Z0-9_]{1,50}`.
    pub canonical_id: String,
    /// Informational only; never consulted by the matcher.
    pub description: String,
    /// The relation reads the same in both directions.
    pub bidirectional: bool,
    /// Lookup key of the inverse relation. Symmetric across the registry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inverse_key: Option<String>,
    pub origin: EntryOrigin,
}

impl TypeEntry {
    /// Metadata record used when nothing in the registry matched a label.
    pub fn synthesized(label: &str, canonical_id: String) -> Self {
        Self {
            lookup_key: label.to_lowercase(),
            canonical_id,
            description: format!("Custom relationship type: {label}"),
            bidirectional: false,
            inverse_key: None,
            origin: EntryOrigin::Synthesized,
        }
    }

    pub fn is_variant(&self) -> bool {
        self.origin == EntryOrigin::Variant
    }
}
