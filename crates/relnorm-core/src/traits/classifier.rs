use crate::models::{Classification, TypeEntry, Validation};

/// Maps free-form relationship labels onto canonical types.
///
/// Every method is total: no input makes it fail.
pub trait IRelationshipClassifier: Send + Sync {
    /// Run the full matching cascade for one label.
    fn classify(&self, label: &str) -> Classification;

    /// Metadata for a label; synthesized when nothing matched.
    fn get_metadata(&self, label: &str) -> TypeEntry;

    /// Whether the label is registered, with a suggestion when it is not.
    fn validate(&self, label: &str) -> Validation;

    /// Canonical identifier only.
    fn canonical_id(&self, label: &str) -> String {
        self.classify(label).canonical_id
    }
}
