//! The matching cascade: exact → substring → fuzzy → sanitized fallback.

mod scorers;

use relnorm_core::config::MatchingConfig;
use relnorm_core::models::{Classification, MatchKind, TypeEntry};
use relnorm_core::sanitize::sanitize;
use relnorm_core::traits::ISimilarityScorer;
use tracing::trace;

use crate::registry::TypeRegistry;

pub use scorers::{scorer_for, IndelRatio, JaroWinklerRatio, LevenshteinRatio, SorensenDiceRatio};

/// A registry entry selected by one of the matching stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'r> {
    pub entry: &'r TypeEntry,
    pub kind: MatchKind,
}

/// Stateless matching procedures over a [`TypeRegistry`].
pub struct Matcher {
    scorer: Box<dyn ISimilarityScorer>,
    threshold: f64,
    substring_matching: bool,
}

impl Matcher {
    pub fn new(config: &MatchingConfig) -> Self {
        Self {
            scorer: scorer_for(config.scorer),
            threshold: config.fuzzy_threshold,
            substring_matching: config.substring_matching,
        }
    }

    /// Use a custom scorer with the given exclusive threshold.
    pub fn with_scorer(scorer: Box<dyn ISimilarityScorer>, threshold: f64) -> Self {
        Self {
            scorer,
            threshold,
            substring_matching: true,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn scorer_name(&self) -> &'static str {
        self.scorer.name()
    }

    /// Step 1: the lower-cased label is a registered key.
    pub fn exact<'r>(&self, registry: &'r TypeRegistry, lowered: &str) -> Option<Match<'r>> {
        registry.get(lowered).map(|entry| Match {
            entry,
            kind: MatchKind::Exact,
        })
    }

    /// Step 2: first entry, in construction order, whose key contains the
    /// label or is contained in it.
    pub fn substring<'r>(&self, registry: &'r TypeRegistry, lowered: &str) -> Option<Match<'r>> {
        registry
            .iter()
            .find(|e| e.lookup_key.contains(lowered) || lowered.contains(e.lookup_key.as_str()))
            .map(|entry| Match {
                entry,
                kind: MatchKind::Substring,
            })
    }

    /// Step 3: highest-scoring entry strictly above the threshold. Ties keep
    /// the earlier entry.
    pub fn fuzzy<'r>(&self, registry: &'r TypeRegistry, lowered: &str) -> Option<Match<'r>> {
        let mut best: Option<&TypeEntry> = None;
        let mut best_score = self.threshold;
        for entry in registry.iter() {
            let score = self.scorer.score(lowered, &entry.lookup_key);
            if score > best_score {
                best_score = score;
                best = Some(entry);
            }
        }
        best.map(|entry| Match {
            entry,
            kind: MatchKind::Fuzzy { score: best_score },
        })
    }

    /// Steps 2–3, for labels that already missed the exact lookup.
    pub fn closest<'r>(&self, registry: &'r TypeRegistry, lowered: &str) -> Option<Match<'r>> {
        if lowered.trim().is_empty() {
            return None;
        }
        let substring = if self.substring_matching {
            self.substring(registry, lowered)
        } else {
            None
        };
        substring.or_else(|| self.fuzzy(registry, lowered))
    }

    /// Steps 1–3. `None` means the caller should fall back to sanitization.
    pub fn find<'r>(&self, registry: &'r TypeRegistry, label: &str) -> Option<Match<'r>> {
        // Whitespace-only labels skip the cascade. Otherwise " " would be a
        // substring of the first multi-word key and classify as that type.
        if label.trim().is_empty() {
            return None;
        }
        let lowered = label.to_lowercase();
        let found = self
            .exact(registry, &lowered)
            .or_else(|| self.closest(registry, &lowered));
        if let Some(m) = &found {
            trace!(label, key = %m.entry.lookup_key, kind = %m.kind, "matched relationship type");
        }
        found
    }

    /// Full cascade including the sanitized fallback. Total for every input.
    pub fn classify(&self, registry: &TypeRegistry, label: &str) -> Classification {
        match self.find(registry, label) {
            Some(m) => Classification {
                input: label.to_string(),
                canonical_id: m.entry.canonical_id.clone(),
                matched_key: Some(m.entry.lookup_key.clone()),
                kind: m.kind,
                entry: Some(m.entry.clone()),
            },
            None => Classification {
                input: label.to_string(),
                canonical_id: sanitize(label),
                matched_key: None,
                kind: MatchKind::Fallback,
                entry: None,
            },
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(&MatchingConfig::default())
    }
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher")
            .field("scorer", &self.scorer.name())
            .field("threshold", &self.threshold)
            .field("substring_matching", &self.substring_matching)
            .finish()
    }
}
