//! WebView lifecycle management.
//!
//! `WebViewManager` creates `wry::WebView` instances, one per tab plus one
//! for the chrome, and collects their events into a shared queue that the
//! main event loop drains.

use std::sync::{Arc, Mutex};

use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::{ViewState, WebViewHandle};
pub use types::WebViewConfig;

/// Creates WebViews and owns the event queue they report into.
#[derive(Clone)]
pub struct WebViewManager {
    /// Event sink. `wry` handlers push here; the event loop drains it.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{PageLoadState, ViewSource};
    use hack_common::TabId;

    #[test]
    fn drain_empties_the_queue() {
        let manager = WebViewManager::new();
        manager.events.lock().unwrap().push(WebViewEvent::PageLoad {
            source: ViewSource::Tab(TabId(1)),
            state: PageLoadState::Finished,
            url: "https://a.example/".into(),
        });

        let events = manager.drain_events();
        assert_eq!(events.len(), 1);
        assert!(manager.drain_events().is_empty());
    }

    #[test]
    fn clones_share_one_queue() {
        let manager = WebViewManager::new();
        let clone = manager.clone();
        clone.events.lock().unwrap().push(WebViewEvent::TitleChanged {
            source: ViewSource::Chrome,
            title: "x".into(),
        });
        assert_eq!(manager.drain_events().len(), 1);
    }
}
