use lorecast::infrastructure::observability::TracingConfig;

// Single test in this binary: it mutates process-wide env vars.
#[test]
fn given_lorecast_env_vars_when_building_config_then_they_take_effect() {
    std::env::set_var("LORECAST_ENV", "staging");
    std::env::set_var("LORECAST_LOG_FORMAT", "JSON");

    let config = TracingConfig::default();
    assert_eq!(config.environment, "staging");
    assert!(config.json_format);

    std::env::remove_var("LORECAST_ENV");
    std::env::remove_var("LORECAST_LOG_FORMAT");

    let config = TracingConfig::default();
    assert_eq!(config.environment, "development");
    assert!(!config.json_format);
}
