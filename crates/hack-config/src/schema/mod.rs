//! Configuration schema: the root `HackConfig` and its sections.

use serde::{Deserialize, Serialize};

mod logging;
mod tabs;
mod webview;
mod window;

pub use logging::LoggingConfig;
pub use tabs::TabsConfig;
pub use webview::WebViewSettings;
pub use window::WindowConfig;

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration. Every section falls back to its defaults when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HackConfig {
    pub window: WindowConfig,
    pub tabs: TabsConfig,
    pub webview: WebViewSettings,
    pub logging: LoggingConfig,
}
