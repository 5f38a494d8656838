//! BrowserApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use hack_browser::{BrowserWindow, ChromeState, MenuBar};
use hack_config::HackConfig;
use hack_webview::{WebViewHandle, WebViewManager};

use super::host::WinitHost;
use super::tab_factory::WryTabFactory;

/// The tab controller with the concrete wry/winit collaborators.
pub(super) type AppBrowser = BrowserWindow<WryTabFactory, MenuBar, WinitHost>;

/// Top-level application state.
pub struct BrowserApp {
    pub(super) config: HackConfig,
    /// First-tab URL from the command line.
    pub(super) start_url: Option<String>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // WebViews
    pub(super) webviews: WebViewManager,
    pub(super) chrome: Option<WebViewHandle>,

    // Tabs
    pub(super) browser: Option<AppBrowser>,

    /// Last state sent to the chrome, `None` until the chrome page is ready.
    pub(super) pushed_chrome_state: Option<ChromeState>,
    pub(super) chrome_ready: bool,

    // Whether the app should exit
    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl BrowserApp {
    pub fn new(config: HackConfig, start_url: Option<String>) -> Self {
        Self {
            config,
            start_url,
            window: None,
            webviews: WebViewManager::new(),
            chrome: None,
            browser: None,
            pushed_chrome_state: None,
            chrome_ready: false,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }

    /// Whether the browser asked the window to close (last tab gone).
    pub(super) fn close_requested(&self) -> bool {
        self.browser
            .as_ref()
            .is_some_and(|b| b.host().close_requested())
    }
}
