//! Webview event polling and routing.

use std::time::{Duration, Instant};

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use hack_common::TabId;
use hack_webview::{PageLoadState, ViewSource, WebViewEvent};

use super::core::BrowserApp;

/// How often the webview event queue is drained.
const POLL_INTERVAL: Duration = Duration::from_millis(16);

impl BrowserApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
            self.sync_chrome_state();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// Drain the webview queue and route each event.
    fn poll_webview_events(&mut self) {
        for event in self.webviews.drain_events() {
            match event.source() {
                ViewSource::Chrome => self.handle_chrome_event(event),
                ViewSource::Tab(_) => self.handle_tab_event(event),
            }
        }
    }

    fn handle_chrome_event(&mut self, event: WebViewEvent) {
        match event {
            WebViewEvent::IpcMessage { body, .. } => self.handle_chrome_ipc(&body),
            WebViewEvent::PageLoad {
                state: PageLoadState::Finished,
                ..
            } => {
                tracing::debug!("Chrome page loaded");
            }
            WebViewEvent::NewWindowRequested { url, .. } => {
                tracing::debug!(url = %url, "Chrome new-window request ignored");
            }
            _ => {}
        }
    }

    fn handle_tab_event(&mut self, event: WebViewEvent) {
        let Some(ref mut browser) = self.browser else {
            return;
        };

        match route_tab_event(&event, |id| browser.tab(id).is_some()) {
            TabRoute::OpenTab(url) => {
                if let Err(e) = browser.add_tab(Some(&url), true) {
                    tracing::warn!(
                        source = %event.source(),
                        url = %url,
                        error = %e,
                        "Failed to open popup tab"
                    );
                }
            }
            TabRoute::Update { id, notify } => {
                let Some(tab) = browser.tab_mut(id) else {
                    return;
                };
                if !tab.apply_event(&event) {
                    return;
                }
                match notify {
                    Some(TabNotify::Loaded) => {
                        browser.on_tab_loaded(id);
                    }
                    Some(TabNotify::TitleChanged) => {
                        browser.on_tab_title_changed(id);
                    }
                    None => {}
                }
            }
            TabRoute::Closed(id) => {
                tracing::debug!(tab_id = %id, "Event for closed tab dropped");
            }
            TabRoute::Ignore => {}
        }
    }
}

// =============================================================================
// ROUTING
// =============================================================================

/// What to do with an event from a tab's webview.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TabRoute {
    /// Popups open as a new foreground tab.
    OpenTab(String),
    /// Fold the event into the tab, then tell the controller if it changed.
    Update {
        id: TabId,
        notify: Option<TabNotify>,
    },
    Closed(TabId),
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TabNotify {
    Loaded,
    TitleChanged,
}

fn route_tab_event(event: &WebViewEvent, is_open: impl Fn(TabId) -> bool) -> TabRoute {
    let ViewSource::Tab(id) = event.source() else {
        return TabRoute::Ignore;
    };

    if let WebViewEvent::NewWindowRequested { url, .. } = event {
        return TabRoute::OpenTab(url.clone());
    }
    if !is_open(id) {
        return TabRoute::Closed(id);
    }

    let notify = match event {
        WebViewEvent::PageLoad {
            state: PageLoadState::Finished,
            ..
        } => Some(TabNotify::Loaded),
        WebViewEvent::PageLoad {
            state: PageLoadState::Started,
            ..
        } => None,
        WebViewEvent::TitleChanged { .. } => Some(TabNotify::TitleChanged),
        _ => return TabRoute::Ignore,
    };
    TabRoute::Update { id, notify }
}
