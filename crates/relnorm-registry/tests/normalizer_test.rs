use relnorm_core::config::{MatchingConfig, NormalizerConfig, ScorerKind};
use relnorm_core::errors::{NormalizerError, TaxonomyError};
use relnorm_core::models::{EntryOrigin, MatchKind, Taxonomy};
use relnorm_core::traits::IRelationshipClassifier;
use relnorm_registry::RelationshipNormalizer;

fn normalizer() -> RelationshipNormalizer {
    RelationshipNormalizer::builtin()
}

// ── classification scenarios ──

#[test]
fn exact_canonical_form() {
    let c = normalizer().classify("integrates with");
    assert_eq!(c.canonical_id, "INTEGRATES_WITH");
    assert_eq!(c.kind, MatchKind::Exact);
    assert_eq!(c.matched_key.as_deref(), Some("integrates with"));
}

#[test]
fn exact_variant_resolves_to_its_canonical_id() {
    let c = normalizer().classify("makes request to");
    assert_eq!(c.canonical_id, "CALLS_API");
    assert!(c.is_exact());
    assert_eq!(c.entry.unwrap().origin, EntryOrigin::Variant);
}

#[test]
fn exact_match_ignores_case() {
    assert_eq!(normalizer().canonical_id("Integrates With"), "INTEGRATES_WITH");
    assert_eq!(normalizer().canonical_id("DEPENDS ON"), "DEPENDS_ON");
}

#[test]
fn typo_resolves_by_fuzzy_match() {
    let c = normalizer().classify("realted");
    assert_eq!(c.canonical_id, "RELATED");
    match c.kind {
        MatchKind::Fuzzy { score } => assert_eq!(score, 86.0),
        other => panic!("expected fuzzy match, got {other}"),
    }
}

#[test]
fn short_word_typos_resolve_by_fuzzy_match() {
    let n = normalizer();
    let hosted = n.classify("hsot on");
    assert_eq!(hosted.canonical_id, "HOSTED_ON");
    assert_eq!(hosted.kind, MatchKind::Fuzzy { score: 75.0 });

    let tests = n.classify("tsets");
    assert_eq!(tests.canonical_id, "TESTS");
    assert_eq!(tests.kind, MatchKind::Fuzzy { score: 80.0 });
}

#[test]
fn levenshtein_scorer_is_stricter_on_transpositions() {
    let config = MatchingConfig {
        scorer: ScorerKind::Levenshtein,
        ..Default::default()
    };
    let n = RelationshipNormalizer::with_taxonomy(&relnorm_registry::taxonomy::builtin(), &config);
    assert_eq!(n.matcher().scorer_name(), "levenshtein");
    assert!(n.classify("hsot on").is_fallback());
}

#[test]
fn longer_label_resolves_by_substring() {
    let c = normalizer().classify("calls api endpoint");
    assert_eq!(c.canonical_id, "CALLS_API");
    assert_eq!(c.kind, MatchKind::Substring);
    assert_eq!(c.matched_key.as_deref(), Some("calls api"));
}

#[test]
fn substring_tie_break_follows_construction_order() {
    // "uses ai" is declared before "uses" among the variants.
    let c = normalizer().classify("uses ai tools");
    assert_eq!(c.matched_key.as_deref(), Some("uses ai"));
    assert_eq!(c.canonical_id, "USES_EMBEDDINGS");
}

#[test]
fn label_containing_a_key_is_not_a_fallback() {
    // "unrelated" contains the key "related".
    let c = normalizer().classify("does somethign unrelated!!");
    assert_eq!(c.canonical_id, "RELATED");
    assert_eq!(c.kind, MatchKind::Substring);
}

#[test]
fn unmatched_label_is_sanitized() {
    let c = normalizer().classify("frobnicates the widget");
    assert_eq!(c.canonical_id, "FROBNICATES_THE_WIDGET");
    assert!(c.is_fallback());
    assert!(c.entry.is_none());
}

#[test]
fn empty_and_blank_labels_fall_back_to_related() {
    for label in ["", "   ", "\t"] {
        let c = normalizer().classify(label);
        assert_eq!(c.canonical_id, "RELATED");
        assert!(c.is_fallback());
    }
}

#[test]
fn punctuation_only_label_falls_back_to_related() {
    assert_eq!(normalizer().canonical_id("?!?!"), "RELATED");
}

#[test]
fn long_unmatched_label_is_truncated() {
    let label = "qqqq ".repeat(30);
    let id = normalizer().canonical_id(&label);
    assert_eq!(id.len(), 50);
    assert!(id.starts_with("QQQQ_QQQQ"));
}

#[test]
fn exact_beats_fuzzy_and_substring() {
    // "reads" is a key of its own as well as a substring of "reads from".
    let c = normalizer().classify("reads");
    assert_eq!(c.kind, MatchKind::Exact);
    assert_eq!(c.canonical_id, "READS_FROM");
}

// ── metadata and validation ──

#[test]
fn metadata_for_registered_label() {
    let entry = normalizer().get_metadata("calls api");
    assert_eq!(entry.canonical_id, "CALLS_API");
    assert_eq!(entry.inverse_key.as_deref(), Some("exposes endpoint"));
    assert_eq!(entry.origin, EntryOrigin::Canonical);
}

#[test]
fn metadata_for_unknown_label_is_synthesized() {
    let entry = normalizer().get_metadata("frobnicates the widget");
    assert_eq!(entry.canonical_id, "FROBNICATES_THE_WIDGET");
    assert_eq!(entry.description, "Custom relationship type: frobnicates the widget");
    assert!(!entry.bidirectional);
    assert!(entry.inverse_key.is_none());
    assert_eq!(entry.origin, EntryOrigin::Synthesized);
}

#[test]
fn validate_reports_suggestions() {
    let n = normalizer();
    let check = |label: &str| -> (bool, Option<String>) { n.validate(label).into() };
    assert_eq!(check("related"), (true, None));
    assert_eq!(check("realted"), (false, Some("related".to_string())));
    assert_eq!(check("calls api endpoint"), (false, Some("calls api".to_string())));
    assert_eq!(check("frobnicates the widget"), (false, None));
}

#[test]
fn validate_blank_suggests_related() {
    let v = normalizer().validate("");
    assert!(!v.is_valid);
    assert_eq!(v.suggestion.as_deref(), Some("related"));
}

// ── listings ──

#[test]
fn list_all_types_in_construction_order() {
    let n = normalizer();
    let all = n.list_all_types();
    assert_eq!(all.len(), 174);
    assert_eq!(all[0], "trains model");
    assert!(all.contains(&"makes request to"));
    let canonical_pos = all.iter().position(|k| *k == "related").unwrap();
    let variant_pos = all.iter().position(|k| *k == "related to").unwrap();
    assert!(canonical_pos < variant_pos);
}

#[test]
fn bidirectional_types() {
    let n = normalizer();
    let keys = n.list_bidirectional_types();
    for key in [
        "related",
        "connected to",
        "associated with",
        "related to",
        "is related to",
        "connected with",
    ] {
        assert!(keys.contains(&key), "missing {key}");
    }
    assert_eq!(keys.len(), 6);
}

#[test]
fn inverse_pairs_are_listed_both_ways() {
    let n = normalizer();
    let pairs = n.list_inverse_pairs();
    assert_eq!(pairs.len(), 10);
    assert!(pairs.contains(&("calls api", "exposes endpoint")));
    assert!(pairs.contains(&("exposes endpoint", "calls api")));
    assert!(pairs.contains(&("tests", "tested by")));
    assert!(pairs.contains(&("part of", "contains")));
}

#[test]
fn categories_are_case_insensitive() {
    let n = normalizer();
    let ai = n.list_category("ai_ml");
    assert!(!ai.is_empty());
    assert_eq!(ai, n.list_category("AI_ML"));
    assert!(n.list_category("NOT_A_CATEGORY").is_empty());
    assert_eq!(n.list_categories().len(), 12);
}

#[test]
fn get_entry_requires_exact_key() {
    let n = normalizer();
    assert!(n.get_entry("calls api").is_some());
    assert!(n.get_entry("Calls API").is_none());
}

// ── batch and trait ──

#[test]
fn batch_preserves_input_order() {
    let labels = ["integrates with", "", "realted", "frobnicates the widget", "has"];
    let n = normalizer();
    let batch = n.classify_batch(&labels);
    assert_eq!(batch.len(), labels.len());
    for (label, c) in labels.iter().zip(&batch) {
        assert_eq!(c.input, *label);
        assert_eq!(c, &n.classify(label));
    }
}

#[test]
fn trait_object_classifies() {
    let classifier: Box<dyn IRelationshipClassifier> = Box::new(normalizer());
    assert_eq!(classifier.canonical_id("depends on"), "DEPENDS_ON");
    assert!(classifier.validate("depends on").is_valid);
}

#[test]
fn clones_share_the_registry() {
    let a = normalizer();
    let b = a.clone();
    assert!(std::ptr::eq(a.registry(), b.registry()));
}

// ── configuration ──

#[test]
fn higher_threshold_rejects_weak_typos() {
    let config = MatchingConfig {
        fuzzy_threshold: 90.0,
        ..Default::default()
    };
    let n = RelationshipNormalizer::with_taxonomy(&relnorm_registry::taxonomy::builtin(), &config);
    // "realted" scores 86 against "related", "depnds on" 95 against "depends on".
    assert!(n.classify("realted").is_fallback());
    assert_eq!(n.canonical_id("depnds on"), "DEPENDS_ON");
}

#[test]
fn alternative_scorer_is_used() {
    let config = MatchingConfig {
        scorer: ScorerKind::JaroWinkler,
        ..Default::default()
    };
    let n = RelationshipNormalizer::with_taxonomy(&relnorm_registry::taxonomy::builtin(), &config);
    assert_eq!(n.matcher().scorer_name(), "jaro_winkler");
    assert_eq!(n.canonical_id("intgrates with"), "INTEGRATES_WITH");
}

#[test]
fn from_config_defaults_to_builtin() {
    let n = RelationshipNormalizer::from_config(&NormalizerConfig::default()).unwrap();
    assert_eq!(n.registry().len(), 174);
}

#[test]
fn from_config_missing_taxonomy_file_errors() {
    let mut config = NormalizerConfig::default();
    config.taxonomy.path = Some("/definitely/not/here/taxonomy.toml".into());
    let err = RelationshipNormalizer::from_config(&config).unwrap_err();
    assert!(matches!(
        err,
        NormalizerError::Taxonomy(TaxonomyError::ReadFailed { .. })
    ));
}

#[test]
fn from_config_loads_taxonomy_file() {
    let mut config = NormalizerConfig::default();
    config.taxonomy.path = Some(
        test_fixtures::fixture_path("golden/taxonomy/minimal.toml")
            .display()
            .to_string(),
    );
    let n = RelationshipNormalizer::from_config(&config).unwrap();
    assert_eq!(n.registry().version(), "minimal-1");
    assert_eq!(n.canonical_id("hits endpoint"), "CALLS_API");
    assert_eq!(n.canonical_id("needs"), "DEPENDS_ON");
    assert!(n.get_entry("ghost phrase").is_none());
    assert_eq!(n.list_inverse_pairs().len(), 2);
    assert_eq!(n.list_category("api").len(), 3);
}

#[test]
fn custom_taxonomy_from_toml() {
    let taxonomy = Taxonomy::from_toml(
        r#"
version = "inline"
canonical_types = ["OWNS", "OWNED_BY", "RELATED"]

[[inverse_pairs]]
forward = "owns"
reverse = "owned by"
"#,
    )
    .unwrap();
    let n = RelationshipNormalizer::with_taxonomy(&taxonomy, &MatchingConfig::default());
    assert_eq!(n.canonical_id("Owns"), "OWNS");
    assert_eq!(n.get_metadata("owned by").inverse_key.as_deref(), Some("owns"));
    assert_eq!(n.canonical_id(""), "RELATED");
}
