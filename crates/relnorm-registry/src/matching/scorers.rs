//! Similarity scorers, all reported on a 0–100 scale.

use relnorm_core::config::ScorerKind;
use relnorm_core::traits::ISimilarityScorer;

/// `100 * 2 * lcs / (len_a + len_b)`, rounded half to even.
///
/// Only insertions and deletions count as edits, so a transposed pair of
/// characters costs two edits out of the combined length rather than two out
/// of the longer length. Empty input scores 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndelRatio;

impl ISimilarityScorer for IndelRatio {
    fn name(&self) -> &'static str {
        "indel"
    }

    fn score(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        let common = longest_common_subsequence(&a, &b);
        (200.0 * common as f64 / (a.len() + b.len()) as f64).round_ties_even()
    }
}

/// Length of the longest common subsequence, one DP row at a time.
fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let mut row = vec![0usize; b.len() + 1];
    for ca in a {
        let mut diagonal = 0;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}

/// `100 * (1 - levenshtein / max_len)`, via `strsim`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinRatio;

impl ISimilarityScorer for LevenshteinRatio {
    fn name(&self) -> &'static str {
        "levenshtein"
    }

    fn score(&self, a: &str, b: &str) -> f64 {
        strsim::normalized_levenshtein(a, b) * 100.0
    }
}

/// Jaro-Winkler similarity, favors shared prefixes.
#[derive(Debug, Clone, Copy, Default)]
pub struct JaroWinklerRatio;

impl ISimilarityScorer for JaroWinklerRatio {
    fn name(&self) -> &'static str {
        "jaro_winkler"
    }

    fn score(&self, a: &str, b: &str) -> f64 {
        strsim::jaro_winkler(a, b) * 100.0
    }
}

/// Sørensen-Dice coefficient over character bigrams.
#[derive(Debug, Clone, Copy, Default)]
pub struct SorensenDiceRatio;

impl ISimilarityScorer for SorensenDiceRatio {
    fn name(&self) -> &'static str {
        "sorensen_dice"
    }

    fn score(&self, a: &str, b: &str) -> f64 {
        strsim::sorensen_dice(a, b) * 100.0
    }
}

/// Scorer implementation for a configured kind.
pub fn scorer_for(kind: ScorerKind) -> Box<dyn ISimilarityScorer> {
    match kind {
        ScorerKind::Indel => Box::new(IndelRatio),
        ScorerKind::Levenshtein => Box::new(LevenshteinRatio),
        ScorerKind::JaroWinkler => Box::new(JaroWinklerRatio),
        ScorerKind::SorensenDice => Box::new(SorensenDiceRatio),
    }
}
