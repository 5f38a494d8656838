//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window appearance settings.
///
/// `title_template` is applied to the active tab's title; `{title}` is
/// replaced by the page title. An empty page title shows `title` instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title used when the active page has none.
    pub title: String,
    pub title_template: String,
    /// Initial inner width in logical pixels (valid range: 320-7680).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 240-4320).
    pub height: u32,
    /// Height reserved at the top for the tab strip and toolbar (valid range: 32-200).
    pub toolbar_height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "HackBrowser".into(),
            title_template: "{title} - HackBrowser".into(),
            width: 1280,
            height: 800,
            toolbar_height: 76,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "HackBrowser");
        assert_eq!(config.title_template, "{title} - HackBrowser");
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 800);
        assert_eq!(config.toolbar_height, 76);
    }

    #[test]
    fn window_config_partial_toml() {
        let toml_str = r#"
title = "Hack"
toolbar_height = 90
"#;
        let config: WindowConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.title, "Hack");
        assert_eq!(config.toolbar_height, 90);
        // Defaults preserved
        assert_eq!(config.width, 1280);
        assert_eq!(config.title_template, "{title} - HackBrowser");
    }
}
