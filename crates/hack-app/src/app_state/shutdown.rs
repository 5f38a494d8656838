//! Teardown: drop tab webviews, then the chrome, then the window.

use super::core::BrowserApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl BrowserApp {
    /// Release every webview before the window they are children of.
    pub(super) fn shutdown(&mut self) {
        if self.should_exit {
            return;
        }
        tracing::info!("Initiating shutdown");

        let tabs = self
            .browser
            .take()
            .map(|b| b.open_tab_count())
            .unwrap_or_default();
        self.chrome = None;
        self.pushed_chrome_state = None;
        self.chrome_ready = false;
        self.window = None;
        self.should_exit = true;

        tracing::info!(tabs, "Browser torn down");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::app_state::core::BrowserApp;
    use hack_config::HackConfig;

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = BrowserApp::new(HackConfig::default(), None);

        app.shutdown();

        assert!(app.browser.is_none());
        assert!(app.chrome.is_none());
        assert!(app.window.is_none());
        assert!(app.should_exit);
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = BrowserApp::new(HackConfig::default(), Some("about:blank".into()));

        app.shutdown();
        app.shutdown();

        assert!(app.should_exit);
        assert!(!app.close_requested());
    }
}
