use hack_config::schema::WebViewSettings;

/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load (mutually exclusive with `html`).
    pub url: Option<String>,
    /// Initial HTML content to render (mutually exclusive with `url`).
    pub html: Option<String>,
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Whether to enable clipboard access.
    pub clipboard: bool,
    /// Whether to enable autoplay for media.
    pub autoplay: bool,
    /// Whether the WebView starts visible.
    pub visible: bool,
    /// Script run in every page before its own scripts.
    pub init_script: Option<&'static str>,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            html: None,
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: None,
            clipboard: true,
            autoplay: true,
            visible: true,
            init_script: None,
        }
    }
}

impl WebViewConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Create a config that renders inline HTML.
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Default::default()
        }
    }

    /// Apply the user's `[webview]` settings.
    pub fn apply_settings(mut self, settings: &WebViewSettings) -> Self {
        self.devtools = settings.devtools;
        self.user_agent = settings.user_agent.clone();
        self.clipboard = settings.clipboard;
        self.autoplay = settings.autoplay;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_url_sets_only_url() {
        let config = WebViewConfig::with_url("https://a.example/");
        assert_eq!(config.url.as_deref(), Some("https://a.example/"));
        assert!(config.html.is_none());
        assert!(config.visible);
    }

    #[test]
    fn settings_are_applied() {
        let settings = WebViewSettings {
            user_agent: Some("HackBrowser/0.1".into()),
            devtools: true,
            clipboard: false,
            autoplay: false,
        };
        let config = WebViewConfig::with_url("about:blank")
            .apply_settings(&settings)
            .hidden();
        assert_eq!(config.user_agent.as_deref(), Some("HackBrowser/0.1"));
        assert!(config.devtools);
        assert!(!config.clipboard);
        assert!(!config.autoplay);
        assert!(!config.visible);
    }
}
