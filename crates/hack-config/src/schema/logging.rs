use serde::{Deserialize, Serialize};

/// Logging settings. `level` is a `tracing-subscriber` env-filter directive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "hackbrowser=info,hack_browser=info,hack_webview=info,hack_config=info".into(),
        }
    }
}
