//! Creates a hidden `wry` child webview for every new tab.

use std::sync::Arc;

use winit::window::Window;

use hack_browser::TabFactory;
use hack_common::{BrowserError, Rect, Result, TabId};
use hack_config::schema::WebViewSettings;
use hack_webview::{ViewSource, WebTab, WebViewConfig, WebViewManager};

use super::layout::rect_to_wry;

pub struct WryTabFactory {
    window: Arc<Window>,
    manager: WebViewManager,
    settings: WebViewSettings,
    /// Where tab content goes. Updated on resize.
    content_bounds: Rect,
}

impl WryTabFactory {
    pub fn new(
        window: Arc<Window>,
        manager: WebViewManager,
        settings: WebViewSettings,
        content_bounds: Rect,
    ) -> Self {
        Self {
            window,
            manager,
            settings,
            content_bounds,
        }
    }

    pub fn set_content_bounds(&mut self, bounds: Rect) {
        self.content_bounds = bounds;
    }
}

impl TabFactory for WryTabFactory {
    type Tab = WebTab;

    fn create_tab(&mut self, id: TabId, url: &str) -> Result<WebTab> {
        // Tabs start hidden; the controller shows the one it activates.
        let config = WebViewConfig::with_url(url)
            .apply_settings(&self.settings)
            .hidden();

        let handle = self
            .manager
            .create(
                ViewSource::Tab(id),
                self.window.as_ref(),
                rect_to_wry(&self.content_bounds),
                config,
            )
            .map_err(|e| BrowserError::TabCreation {
                id,
                reason: e.to_string(),
            })?;

        Ok(WebTab::new(id, handle))
    }
}
