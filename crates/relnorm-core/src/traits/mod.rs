pub mod classifier;
pub mod scorer;

pub use classifier::IRelationshipClassifier;
pub use scorer::ISimilarityScorer;
