use serde::{Deserialize, Serialize};

/// Counts describing a built registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    pub total: usize,
    pub canonical: usize,
    pub variants: usize,
    pub bidirectional: usize,
    /// Entries with an inverse key (two per applied pair).
    pub inverse_links: usize,
    /// Variants dropped because their canonical target was unknown.
    pub skipped_variants: usize,
    /// Inverse pairs dropped because a side was missing from the registry.
    pub skipped_inverse_pairs: usize,
}
