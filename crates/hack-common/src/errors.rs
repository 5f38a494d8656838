use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error("failed to create tab {id}: {reason}")]
    TabCreation { id: crate::TabId, reason: String },

    #[error("webview error: {0}")]
    WebView(String),

    #[error("{0}")]
    Other(String),
}
