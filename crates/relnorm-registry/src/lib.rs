//! # relnorm-registry
//!
//! Maps free-form relationship labels (typically emitted by an extraction model)
//! onto a fixed taxonomy of graph-store relationship types.
//!
//! The [`TypeRegistry`] is built once from a [`Taxonomy`](relnorm_core::Taxonomy)
//! and never mutated afterwards. The [`Matcher`] runs the cascade
//! exact → substring → fuzzy → sanitized fallback over it, and
//! [`RelationshipNormalizer`] ties the two together behind one handle.

pub mod engine;
pub mod global;
pub mod matching;
pub mod registry;
pub mod taxonomy;
pub mod tracing_setup;

pub use engine::RelationshipNormalizer;
pub use global::{build_registry, default_normalizer};
pub use matching::{scorer_for, Match, Matcher};
pub use registry::TypeRegistry;
