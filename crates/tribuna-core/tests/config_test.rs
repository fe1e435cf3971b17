use tribuna_core::config::{HighlightConfig, TopicsConfig, TribunaConfig};
use tribuna_core::errors::TribunaError;

#[test]
fn highlight_defaults_carry_the_exact_heuristics() {
    let config = HighlightConfig::default();
    assert_eq!(config.recency_window_days, 30);
    assert_eq!(config.engagement_cap, 50.0);
    assert_eq!(config.weights.recency, 0.4);
    assert_eq!(config.weights.engagement, 0.3);
    assert_eq!(config.weights.momentum, 0.2);
    assert_eq!(config.weights.theme, 0.1);
    assert_eq!(config.neutral_momentum, 0.25);
    assert_eq!(config.cold_start_floor, 0.4);
    assert_eq!(config.max_override_boost, 0.5);
}

#[test]
fn default_weights_form_a_convex_combination() {
    let w = HighlightConfig::default().weights;
    assert!((w.recency + w.engagement + w.momentum + w.theme - 1.0).abs() < 1e-9);
}

#[test]
fn topics_defaults_carry_the_cost_control_limits() {
    let config = TopicsConfig::default();
    assert_eq!(config.lookback_days, 45);
    assert_eq!(config.max_candidates, 80);
    assert_eq!(config.default_limit, 5);
}

#[test]
fn partial_toml_keeps_defaults_for_missing_fields() {
    let config = TribunaConfig::from_toml_str(
        r#"
        [topics]
        lookback_days = 10

        [highlight]
        engagement_cap = 25.0
        "#,
    )
    .unwrap();

    assert_eq!(config.topics.lookback_days, 10);
    assert_eq!(config.topics.max_candidates, 80);
    assert_eq!(config.highlight.engagement_cap, 25.0);
    assert_eq!(config.highlight.recency_window_days, 30);
}

#[test]
fn invalid_toml_is_a_config_error() {
    let err = TribunaConfig::from_toml_str("topics = \"not a table\"").unwrap_err();
    assert!(matches!(err, TribunaError::Config { .. }));
}
