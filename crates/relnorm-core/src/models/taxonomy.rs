//! Serializable taxonomy: the source data a registry is built from.
//!
//! The compiled-in tables live in the registry crate; this type also lets a
//! versioned TOML data file replace them.
//!
//! ```
//! use relnorm_core::Taxonomy;
//!
//! let taxonomy = Taxonomy::from_toml(r#"
//! version = "custom-1"
//! canonical_types = ["CALLS_API", "EXPOSES_ENDPOINT", "RELATED"]
//! bidirectional = ["related"]
//!
//! [[variants]]
//! phrase = "hits endpoint"
//! canonical = "CALLS_API"
//!
//! [[inverse_pairs]]
//! forward = "calls api"
//! reverse = "exposes endpoint"
//! "#).unwrap();
//! assert_eq!(taxonomy.canonical_types.len(), 3);
//! assert_eq!(taxonomy.variants[0].canonical, "CALLS_API");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Category;
use crate::errors::TaxonomyError;

/// Free-form phrase known to mean a canonical type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantAlias {
    pub phrase: String,
    /// Canonical taxonomy label (`CALLS_API`), not a lookup key.
    pub canonical: String,
}

/// Two lookup keys describing the same fact from opposite directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InversePair {
    pub forward: String,
    pub reverse: String,
}

/// Complete static configuration of a registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Taxonomy {
    pub version: String,
    /// Canonical labels in priority order.
    pub canonical_types: Vec<String>,
    /// Alias table, in priority order.
    pub variants: Vec<VariantAlias>,
    pub inverse_pairs: Vec<InversePair>,
    /// Lookup keys of the symmetric relations.
    pub bidirectional: Vec<String>,
    pub categories: Vec<Category>,
}

impl Taxonomy {
    /// Parse a taxonomy from TOML text.
    pub fn from_toml(toml_str: &str) -> Result<Self, TaxonomyError> {
        Self::parse(toml_str, "<string>")
    }

    /// Read and parse a taxonomy file.
    pub fn from_file(path: &Path) -> Result<Self, TaxonomyError> {
        let content = std::fs::read_to_string(path).map_err(|e| TaxonomyError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    fn parse(toml_str: &str, source_name: &str) -> Result<Self, TaxonomyError> {
        let taxonomy: Taxonomy =
            toml::from_str(toml_str).map_err(|e| TaxonomyError::ParseError {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })?;
        taxonomy.validate()?;
        Ok(taxonomy)
    }

    /// A taxonomy must define at least one canonical type.
    pub fn validate(&self) -> Result<(), TaxonomyError> {
        if self.canonical_types.iter().all(|t| t.trim().is_empty()) {
            return Err(TaxonomyError::EmptyTaxonomy);
        }
        Ok(())
    }

    /// Case-insensitive category lookup.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.is_named(name))
    }
}
