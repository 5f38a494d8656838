use serde::{Deserialize, Serialize};

/// Settings applied to every content webview.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewSettings {
    /// Custom user agent. `None` keeps the platform engine's default.
    pub user_agent: Option<String>,
    /// Whether to enable dev tools (on by default in debug builds).
    pub devtools: bool,
    pub clipboard: bool,
    pub autoplay: bool,
}

impl Default for WebViewSettings {
    fn default() -> Self {
        Self {
            user_agent: None,
            devtools: cfg!(debug_assertions),
            clipboard: true,
            autoplay: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webview_settings_defaults() {
        let settings = WebViewSettings::default();
        assert!(settings.user_agent.is_none());
        assert!(settings.clipboard);
        assert!(settings.autoplay);
    }

    #[test]
    fn user_agent_parses() {
        let settings: WebViewSettings = toml::from_str("user_agent = \"HackBrowser/0.1\"").unwrap();
        assert_eq!(settings.user_agent.as_deref(), Some("HackBrowser/0.1"));
    }
}
