use std::sync::LazyLock;

use proptest::prelude::*;
use regex::Regex;
use relnorm_registry::default_normalizer;

static CANONICAL_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z0-9_]{1,50}$").unwrap());

proptest! {
    #[test]
    fn classify_always_yields_valid_identifier(label in ".{0,80}") {
        let id = default_normalizer().canonical_id(&label);
        prop_assert!(CANONICAL_ID.is_match(&id), "{:?} -> {:?}", label, id);
    }

    #[test]
    fn classify_is_deterministic(label in "[a-zA-Z _!?-]{0,40}") {
        let n = default_normalizer();
        prop_assert_eq!(n.classify(&label), n.classify(&label));
    }

    #[test]
    fn registered_keys_match_exactly_in_any_case(idx in 0usize..174, upper in any::<bool>()) {
        let n = default_normalizer();
        let entry = n.registry().iter().nth(idx).unwrap();
        let label = if upper {
            entry.lookup_key.to_uppercase()
        } else {
            entry.lookup_key.clone()
        };
        let c = n.classify(&label);
        prop_assert!(c.is_exact());
        prop_assert_eq!(&c.canonical_id, &entry.canonical_id);
    }

    #[test]
    fn batch_matches_single_classification(labels in prop::collection::vec("[a-z ]{0,20}", 0..16)) {
        let n = default_normalizer();
        let batch = n.classify_batch(labels.as_slice());
        prop_assert_eq!(batch.len(), labels.len());
        for (label, c) in labels.iter().zip(batch) {
            prop_assert_eq!(c, n.classify(label));
        }
    }
}
