use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, ViewSource, WebViewEvent};

use super::WebViewManager;

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

fn push(events: &Mutex<Vec<WebViewEvent>>, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        source: ViewSource,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(
                    %source,
                    body_len = body.len(),
                    "IPC message rejected: invalid JSON"
                );
                return;
            }

            debug!(%source, body_len = body.len(), "IPC message from JS");
            push(&events, WebViewEvent::IpcMessage { source, body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        source: ViewSource,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(%source, ?state, url = %url, "page load");
            push(&events, WebViewEvent::PageLoad { source, state, url });
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        source: ViewSource,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(%source, title = %title, "title changed");
            push(&events, WebViewEvent::TitleChanged { source, title });
        })
    }

    /// Tabs may navigate anywhere; failures surface in the page itself.
    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        source: ViewSource,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            debug!(%source, url = %url, "navigation requested");
            push(&events, WebViewEvent::NavigationRequested { source, url });
            true
        })
    }

    /// Popups never get their own native window; the app opens them as tabs.
    pub(super) fn attach_new_window_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        source: ViewSource,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |url| {
            debug!(%source, url = %url, "new window requested");
            push(&events, WebViewEvent::NewWindowRequested { source, url });
            false
        })
    }
}
