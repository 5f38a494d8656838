use serde::{Deserialize, Serialize};

/// Tab defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    /// Page opened in the first tab of a new window.
    pub home_page: String,
    /// Page opened by the "add tab" control.
    pub new_tab_url: String,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            home_page: "http://www.google.com/".into(),
            new_tab_url: "about:blank".into(),
        }
    }
}
