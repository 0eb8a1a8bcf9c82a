//! Identifier sanitization.
//!
//! Turns any free-form label into an identifier the graph store accepts:
//! `[A-Z0-9_]{1,50}`. Used as the fallback when no registry entry matches.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{FALLBACK_CANONICAL_ID, MAX_CANONICAL_ID_LEN};

// Underscores survive so that already-canonical identifiers pass through unchanged.
static DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s]").unwrap());

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Convert a relationship label into a canonical identifier.
///
/// - empty, blank, or all-punctuation input yields `"RELATED"`
/// - characters other than ASCII letters, digits, `_` and whitespace are dropped
/// - leading and trailing whitespace is trimmed first, so `" a b "` gives
///   `"A_B"` and never `"_A_B_"`
/// - remaining whitespace runs become a single `_`
/// - existing underscores are kept, so `"calls_api"` gives `"CALLS_API"`
/// - the result is upper-cased and capped at 50 characters
///
/// The function is idempotent: `sanitize(&sanitize(x)) == sanitize(x)`.
///
/// ```
/// use relnorm_core::sanitize;
///
/// assert_eq!(sanitize("integrates with"), "INTEGRATES_WITH");
/// assert_eq!(sanitize("does somethign unrelated!!"), "DOES_SOMETHIGN_UNRELATED");
/// assert_eq!(sanitize("?!"), "RELATED");
/// ```
pub fn sanitize(label: &str) -> String {
    let stripped = DISALLOWED_RE.replace_all(label, "");
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        return FALLBACK_CANONICAL_ID.to_string();
    }

    let mut id = WHITESPACE_RE.replace_all(trimmed, "_").to_ascii_uppercase();
    // Only ASCII remains, so byte truncation lands on a char boundary.
    id.truncate(MAX_CANONICAL_ID_LEN);
    id
}

/// Whether `id` satisfies the canonical identifier invariant.
pub fn is_valid_canonical_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_CANONICAL_ID_LEN
        && id
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_')
}

/// Derive a registry lookup key from a canonical label: `CALLS_API` -> `calls api`.
pub fn to_lookup_key(canonical: &str) -> String {
    canonical.to_lowercase().replace('_', " ")
}
