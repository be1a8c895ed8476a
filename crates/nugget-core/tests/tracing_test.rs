use nugget_core::config::ObservabilityConfig;
use nugget_core::tracing_setup::{env_filter, init_tracing};

#[test]
fn env_filter_falls_back_to_configured_level() {
    if std::env::var("NUGGET_LOG").is_ok() {
        return;
    }
    let config = ObservabilityConfig {
        log_level: "debug".to_string(),
        ..ObservabilityConfig::default()
    };
    assert_eq!(env_filter(&config).to_string(), "debug");
}

#[test]
fn init_tracing_twice_is_a_no_op() {
    let json = ObservabilityConfig {
        json_logs: true,
        ..ObservabilityConfig::default()
    };
    init_tracing(&json);
    init_tracing(&ObservabilityConfig::default());
    tracing::info!("still logging after repeated init");
}
