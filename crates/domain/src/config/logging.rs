use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter directive handed to the subscriber (`info`, `nslite=debug`, ...)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Include the event target (module path) in each log line
    #[serde(default)]
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            with_target: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
