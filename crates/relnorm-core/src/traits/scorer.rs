/// String similarity on a 0–100 scale.
///
/// The fuzzy stage only depends on this interface, so the algorithm can be
/// swapped without touching the matching cascade.
pub trait ISimilarityScorer: Send + Sync {
    /// Scorer name for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Similarity of `a` and `b`, 0.0 (unrelated) to 100.0 (identical).
    fn score(&self, a: &str, b: &str) -> f64;
}
