use interviewer::infrastructure::observability::TracingConfig;
use interviewer::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_logging_settings_when_building_config_then_level_becomes_default_filter() {
    let logging = LoggingSettings {
        level: "warn,interviewer=info".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(Environment::Prod, &logging);

    assert_eq!(config.environment, "Prod");
    assert_eq!(config.default_filter, "warn,interviewer=info");
    assert!(config.json_format);
}

#[test]
fn given_default_config_when_built_then_crate_logs_at_debug() {
    let config = TracingConfig::default();

    assert!(config.default_filter.contains("interviewer=debug"));
}
