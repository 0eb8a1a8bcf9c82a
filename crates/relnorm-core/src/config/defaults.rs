//! Compiled-in default values for every config section.

pub use crate::constants::DEFAULT_FUZZY_THRESHOLD;

pub const DEFAULT_SUBSTRING_MATCHING: bool = true;
pub const DEFAULT_LOG_FILTER: &str = "relnorm=info";
pub const DEFAULT_JSON_LOGS: bool = false;
