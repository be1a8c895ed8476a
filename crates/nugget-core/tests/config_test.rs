use nugget_core::config::*;
use nugget_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = NuggetConfig::from_toml("").unwrap();

    // Prediction defaults
    assert_eq!(config.prediction.window_size, 10);
    assert_eq!(config.prediction.max_valid_gap_hours, 12.0);
    assert_eq!(config.prediction.feeding_preference_weight, 0.4);
    assert_eq!(config.prediction.pumping_preference_weight, 0.4);
    assert_eq!(config.prediction.sleep_preference_weight, 0.3);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[prediction]
window_size = 25
pumping_preference_weight = 0.6

[observability]
json_logs = true
"#;
    let config = NuggetConfig::from_toml(toml).unwrap();
    assert_eq!(config.prediction.window_size, 25);
    assert_eq!(config.prediction.pumping_preference_weight, 0.6);
    // Non-overridden fields keep defaults
    assert_eq!(config.prediction.max_valid_gap_hours, 12.0);
    assert_eq!(config.prediction.feeding_preference_weight, 0.4);
    assert!(config.observability.json_logs);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn config_serde_roundtrip() {
    let config = NuggetConfig::default();
    let toml_str = config.to_toml().unwrap();
    let roundtripped = NuggetConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped, config);
}

#[test]
fn config_rejects_zero_window() {
    let err = NuggetConfig::from_toml("[prediction]\nwindow_size = 0\n").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "prediction.window_size")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_rejects_weight_out_of_range() {
    let err =
        NuggetConfig::from_toml("[prediction]\nsleep_preference_weight = 1.2\n").unwrap_err();
    assert!(err.to_string().contains("sleep_preference_weight"));
}

#[test]
fn config_rejects_non_positive_gap_bound() {
    let err = NuggetConfig::from_toml("[prediction]\nmax_valid_gap_hours = 0.0\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn config_reports_parse_errors() {
    let err = NuggetConfig::from_toml("[prediction\nwindow_size = 3").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn config_from_missing_file() {
    let err = NuggetConfig::from_file(std::path::Path::new("/definitely/not/here/nugget.toml"))
        .unwrap_err();
    match err {
        ConfigError::FileNotFound { path } => assert!(path.contains("nugget.toml")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_from_file_reads_toml() {
    let path = std::env::temp_dir().join(format!("nugget-config-{}.toml", uuid::Uuid::new_v4()));
    std::fs::write(&path, "[prediction]\nmax_valid_gap_hours = 10.0\n").unwrap();
    let config = NuggetConfig::from_file(&path);
    std::fs::remove_file(&path).unwrap();
    let config = config.unwrap();
    // NUGGET_MAX_VALID_GAP_HOURS is not set in the test environment.
    if std::env::var("NUGGET_MAX_VALID_GAP_HOURS").is_err() {
        assert_eq!(config.prediction.max_valid_gap_hours, 10.0);
    }
}
