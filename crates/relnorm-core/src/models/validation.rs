use serde::{Deserialize, Serialize};

/// Outcome of validating a relationship label against the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    /// The label is itself a registered lookup key.
    pub is_valid: bool,
    /// Closest registered lookup key when the label is not valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Validation {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            suggestion: None,
        }
    }

    pub fn invalid(suggestion: Option<String>) -> Self {
        Self {
            is_valid: false,
            suggestion,
        }
    }
}

impl From<Validation> for (bool, Option<String>) {
    fn from(v: Validation) -> Self {
        (v.is_valid, v.suggestion)
    }
}
