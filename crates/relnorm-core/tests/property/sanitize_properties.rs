//! Property tests for identifier sanitization.

use proptest::prelude::*;

use relnorm_core::sanitize::{is_valid_canonical_id, sanitize};

proptest! {
    #[test]
    fn sanitize_output_is_always_a_valid_identifier(text in ".{0,200}") {
        let id = sanitize(&text);
        prop_assert!(is_valid_canonical_id(&id), "invalid identifier {:?} from {:?}", id, text);
    }

    #[test]
    fn sanitize_is_idempotent(text in ".{0,200}") {
        let first = sanitize(&text);
        let second = sanitize(&first);
        prop_assert_eq!(&first, &second, "not idempotent for {:?}", text);
    }

    #[test]
    fn sanitize_never_exceeds_fifty_chars(words in prop::collection::vec("[a-zA-Z0-9]{1,20}", 0..20)) {
        let label = words.join(" ");
        prop_assert!(sanitize(&label).len() <= 50);
    }

    #[test]
    fn sanitize_is_case_insensitive(text in "[a-zA-Z0-9 ]{0,60}") {
        prop_assert_eq!(sanitize(&text.to_lowercase()), sanitize(&text.to_uppercase()));
    }
}
