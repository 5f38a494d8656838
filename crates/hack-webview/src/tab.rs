//! A browser tab backed by a `wry` WebView.

use tracing::warn;

use hack_browser::TabView;
use hack_common::TabId;

use crate::events::WebViewEvent;
use crate::manager::WebViewHandle;

/// One tab's WebView. Hidden while inactive; dropping it destroys the view.
pub struct WebTab {
    id: TabId,
    handle: WebViewHandle,
}

impl WebTab {
    pub fn new(id: TabId, handle: WebViewHandle) -> Self {
        Self { id, handle }
    }

    pub fn handle(&self) -> &WebViewHandle {
        &self.handle
    }

    pub fn apply_event(&mut self, event: &WebViewEvent) -> bool {
        self.handle.apply_event(event)
    }
}

impl TabView for WebTab {
    type View = WebViewHandle;

    fn id(&self) -> TabId {
        self.id
    }

    fn navigate_to(&mut self, url: &str) {
        if let Err(e) = self.handle.load_url(url) {
            warn!(tab_id = %self.id, url = %url, error = %e, "navigation failed");
        }
    }

    fn activate(&mut self) {
        if let Err(e) = self.handle.set_visible(true) {
            warn!(tab_id = %self.id, error = %e, "failed to show tab");
        }
        if let Err(e) = self.handle.focus() {
            warn!(tab_id = %self.id, error = %e, "failed to focus tab");
        }
    }

    fn deactivate(&mut self) {
        if let Err(e) = self.handle.set_visible(false) {
            warn!(tab_id = %self.id, error = %e, "failed to hide tab");
        }
    }

    fn is_ready(&self) -> bool {
        self.handle.is_ready()
    }

    /// The page title, or the URL while the page has none.
    fn title_text(&self) -> &str {
        let title = self.handle.current_title();
        if title.trim().is_empty() {
            self.handle.current_url()
        } else {
            title
        }
    }

    fn current_url(&self) -> &str {
        self.handle.current_url()
    }

    fn content_view(&self) -> &WebViewHandle {
        &self.handle
    }

    fn content_view_mut(&mut self) -> &mut WebViewHandle {
        &mut self.handle
    }
}
