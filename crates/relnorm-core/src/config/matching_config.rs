use serde::{Deserialize, Serialize};

use super::defaults;

/// Similarity algorithm used by the fuzzy stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorerKind {
    /// Insertion/deletion ratio rounded to a whole number.
    #[default]
    Indel,
    /// Normalized Levenshtein ratio.
    Levenshtein,
    /// Jaro-Winkler similarity.
    JaroWinkler,
    /// Sørensen-Dice coefficient over character bigrams.
    SorensenDice,
}

impl ScorerKind {
    pub const ALL: [ScorerKind; 4] = [
        Self::Indel,
        Self::Levenshtein,
        Self::JaroWinkler,
        Self::SorensenDice,
    ];

    /// Parse from string (matching the serde rename).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "indel" => Some(Self::Indel),
            "levenshtein" => Some(Self::Levenshtein),
            "jaro_winkler" => Some(Self::JaroWinkler),
            "sorensen_dice" => Some(Self::SorensenDice),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Indel => "indel",
            Self::Levenshtein => "levenshtein",
            Self::JaroWinkler => "jaro_winkler",
            Self::SorensenDice => "sorensen_dice",
        }
    }
}

impl std::fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Matcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Fuzzy scores (0–100) must be strictly greater than this to match.
    pub fuzzy_threshold: f64,
    /// Similarity algorithm for the fuzzy stage.
    pub scorer: ScorerKind,
    /// Run the substring containment stage before fuzzy scoring.
    pub substring_matching: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: defaults::DEFAULT_FUZZY_THRESHOLD,
            scorer: ScorerKind::default(),
            substring_matching: defaults::DEFAULT_SUBSTRING_MATCHING,
        }
    }
}
