use super::TypeRegistry;

impl TypeRegistry {
    /// Entries whose inverse does not point back at them.
    ///
    /// Returns `(lookup_key, inverse_key)` for each violation. Construction
    /// keeps this empty; the check exists for registries assembled in tests
    /// and for startup diagnostics.
    pub fn check_inverse_symmetry(&self) -> Vec<(String, String)> {
        self.iter()
            .filter_map(|entry| {
                let inverse = entry.inverse_key.as_deref()?;
                let back = self.get(inverse).and_then(|e| e.inverse_key.as_deref());
                if back == Some(entry.lookup_key.as_str()) {
                    None
                } else {
                    Some((entry.lookup_key.clone(), inverse.to_string()))
                }
            })
            .collect()
    }

    /// Whether every inverse link is mutual.
    pub fn is_consistent(&self) -> bool {
        self.check_inverse_symmetry().is_empty()
    }
}
