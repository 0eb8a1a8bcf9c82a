use serde::{Deserialize, Serialize};

use super::TypeEntry;

/// Which stage of the matching cascade produced a classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchKind {
    /// The lower-cased label is a registered lookup key.
    Exact,
    /// The label contains, or is contained in, a registered lookup key.
    Substring,
    /// Similarity score (0–100) above the configured threshold.
    Fuzzy { score: f64 },
    /// Nothing matched; the identifier was produced by sanitization.
    Fallback,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Substring => "substring",
            Self::Fuzzy { .. } => "fuzzy",
            Self::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one relationship label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// The label as supplied by the caller.
    pub input: String,
    /// Always satisfies the canonical identifier invariant.
    pub canonical_id: String,
    /// Registry key that matched, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_key: Option<String>,
    pub kind: MatchKind,
    /// Registry entry for the match; `None` on fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<TypeEntry>,
}

impl Classification {
    pub fn is_fallback(&self) -> bool {
        self.kind == MatchKind::Fallback
    }

    pub fn is_exact(&self) -> bool {
        self.kind == MatchKind::Exact
    }
}
