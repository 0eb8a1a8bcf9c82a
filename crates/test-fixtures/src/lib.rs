//! Fixture loader for the relationship normalizer's golden datasets.
//!
//! Golden files live next to this crate under `golden/`. The typed case
//! structs below mirror their JSON layout so integration tests in any
//! workspace crate can iterate them directly.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    // Walk up from the calling crate until a sibling `test-fixtures` shows up.
    loop {
        if path.join("golden").exists() && path.ends_with("test-fixtures") {
            return path;
        }
        let candidate = path.join("crates").join("test-fixtures");
        if candidate.exists() {
            return candidate;
        }
        let sibling = path.join("test-fixtures");
        if sibling.join("golden").exists() {
            return sibling;
        }
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
}

/// One expected classification outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassificationCase {
    pub input: String,
    pub expected_canonical_id: String,
    pub expected_key: Option<String>,
    /// `exact`, `substring`, `fuzzy` or `fallback`.
    pub expected_kind: String,
}

/// One expected `validate` outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationCase {
    pub input: String,
    pub expected_valid: bool,
    pub expected_suggestion: Option<String>,
}

/// A golden file: a short description plus its cases.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenSet<T> {
    pub description: String,
    pub cases: Vec<T>,
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Load a fixture file as raw text (taxonomy TOML files).
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load a golden classification file.
pub fn load_classification_cases(relative_path: &str) -> GoldenSet<ClassificationCase> {
    load_fixture(relative_path)
}

/// Load a golden validation file.
pub fn load_validation_cases(relative_path: &str) -> GoldenSet<ValidationCase> {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}
