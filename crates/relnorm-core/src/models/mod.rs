pub mod category;
pub mod classification;
pub mod registry_stats;
pub mod taxonomy;
pub mod type_entry;
pub mod validation;

pub use category::Category;
pub use classification::{Classification, MatchKind};
pub use registry_stats::RegistryStats;
pub use taxonomy::{InversePair, Taxonomy, VariantAlias};
pub use type_entry::{EntryOrigin, TypeEntry};
pub use validation::Validation;
