/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum length of a canonical identifier accepted by the graph store.
pub const MAX_CANONICAL_ID_LEN: usize = 50;

/// Canonical identifier returned for empty or unusable labels.
pub const FALLBACK_CANONICAL_ID: &str = "RELATED";

/// Lookup key of the generic fallback relation.
pub const FALLBACK_LOOKUP_KEY: &str = "related";

/// Lookup keys of the symmetric generic relations.
pub const SYMMETRIC_LOOKUP_KEYS: [&str; 3] = ["related", "connected to", "associated with"];

/// Fuzzy scores must be strictly above this value to count as a match (0–100).
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 70.0;

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "RELNORM_LOG";
