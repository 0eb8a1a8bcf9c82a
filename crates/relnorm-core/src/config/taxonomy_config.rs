use serde::{Deserialize, Serialize};

/// Where the relationship taxonomy comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// Path to a TOML taxonomy file. `None` uses the compiled-in tables.
    pub path: Option<String>,
}
