/// Configuration for tracing initialization. `LORECAST_ENV` names the
/// deployment environment; `LORECAST_LOG_FORMAT=json` switches to
/// structured output.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("LORECAST_ENV")
                .unwrap_or_else(|_| "development".to_string()),
            json_format: std::env::var("LORECAST_LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        }
    }
}
