use std::collections::HashMap;

use relnorm_core::config::*;
use relnorm_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = NormalizerConfig::from_toml("").unwrap();

    assert_eq!(config.matching.fuzzy_threshold, 70.0);
    assert_eq!(config.matching.scorer, ScorerKind::Indel);
    assert!(config.matching.substring_matching);

    assert!(config.taxonomy.path.is_none());

    assert_eq!(config.observability.log_filter, "relnorm=info");
    assert!(!config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[matching]
fuzzy_threshold = 80.0
scorer = "jaro_winkler"

[taxonomy]
path = "/etc/relnorm/taxonomy.toml"
"#;
    let config = NormalizerConfig::from_toml(toml).unwrap();
    assert_eq!(config.matching.fuzzy_threshold, 80.0);
    assert_eq!(config.matching.scorer, ScorerKind::JaroWinkler);
    // Non-overridden fields keep defaults
    assert!(config.matching.substring_matching);
    assert_eq!(
        config.taxonomy.path.as_deref(),
        Some("/etc/relnorm/taxonomy.toml")
    );
    assert_eq!(config.observability.log_filter, "relnorm=info");
}

#[test]
fn config_rejects_out_of_range_threshold() {
    let err = NormalizerConfig::from_toml("[matching]\nfuzzy_threshold = 120.0\n").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "matching.fuzzy_threshold")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_rejects_unknown_scorer() {
    let err = NormalizerConfig::from_toml("[matching]\nscorer = \"soundex\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn config_serde_roundtrip() {
    let config = NormalizerConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = NormalizerConfig::from_toml(&toml_str).unwrap();
    assert_eq!(
        roundtripped.matching.fuzzy_threshold,
        config.matching.fuzzy_threshold
    );
    assert_eq!(roundtripped.matching.scorer, config.matching.scorer);
}

#[test]
fn overrides_apply_valid_values() {
    let vars: HashMap<&str, &str> = [
        ("RELNORM_FUZZY_THRESHOLD", "85"),
        ("RELNORM_SCORER", "sorensen_dice"),
        ("RELNORM_TAXONOMY_PATH", "taxonomy.toml"),
    ]
    .into_iter()
    .collect();

    let mut config = NormalizerConfig::default();
    config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

    assert_eq!(config.matching.fuzzy_threshold, 85.0);
    assert_eq!(config.matching.scorer, ScorerKind::SorensenDice);
    assert_eq!(config.taxonomy.path.as_deref(), Some("taxonomy.toml"));
}

#[test]
fn overrides_ignore_garbage() {
    let mut config = NormalizerConfig::default();
    config.apply_overrides(|key| match key {
        "RELNORM_FUZZY_THRESHOLD" => Some("high".to_string()),
        "RELNORM_SCORER" => Some("bogus".to_string()),
        "RELNORM_TAXONOMY_PATH" => Some("  ".to_string()),
        _ => None,
    });

    assert_eq!(config.matching.fuzzy_threshold, 70.0);
    assert_eq!(config.matching.scorer, ScorerKind::Indel);
    assert!(config.taxonomy.path.is_none());
}

#[test]
fn load_reports_missing_file() {
    let err = NormalizerConfig::load(std::path::Path::new("/nonexistent/relnorm.toml"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn scorer_kind_names_roundtrip() {
    for kind in ScorerKind::ALL {
        assert_eq!(ScorerKind::from_str_name(kind.as_str()), Some(kind));
    }
    assert_eq!(ScorerKind::from_str_name("hamming"), None);
}
