/// Runtime knobs for telemetry output, read once at startup.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
}

impl TracingConfig {
    /// `APP_ENV` names the deployment environment; `LOG_FORMAT=json` switches
    /// from human-readable lines to structured JSON output.
    pub fn from_env() -> Self {
        Self {
            environment: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the process-global env mutation cannot race a sibling.
    #[test]
    fn given_env_overrides_then_from_env_reads_them_case_insensitively() {
        std::env::set_var("APP_ENV", "staging");
        std::env::set_var("LOG_FORMAT", "JSON");

        let config = TracingConfig::from_env();
        assert_eq!(config.environment, "staging");
        assert!(config.json_format);

        std::env::remove_var("APP_ENV");
        std::env::remove_var("LOG_FORMAT");
        let config = TracingConfig::from_env();
        assert_eq!(config.environment, "development");
        assert!(!config.json_format);
    }
}
