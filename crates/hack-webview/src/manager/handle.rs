use tracing::warn;
use wry::WebView;

use hack_browser::ContentView;

use crate::events::{PageLoadState, ViewSource, WebViewEvent};
use crate::history::{NavigationHistory, Traversal};

/// What is known about a view's page, folded from its events.
#[derive(Debug, Clone)]
pub struct ViewState {
    source: ViewSource,
    /// Current URL (best-effort tracking).
    current_url: String,
    current_title: String,
    /// Set by the first finished page load, never cleared.
    ready: bool,
    history: NavigationHistory,
}

impl ViewState {
    pub fn new(source: ViewSource, initial_url: impl Into<String>) -> Self {
        Self {
            source,
            current_url: initial_url.into(),
            current_title: String::new(),
            ready: false,
            history: NavigationHistory::new(),
        }
    }

    /// Fold an event from this view into the tracked state.
    ///
    /// Returns `true` when the event belonged to this view and changed
    /// something the chrome shows.
    pub fn apply(&mut self, event: &WebViewEvent) -> bool {
        if event.source() != self.source {
            return false;
        }
        match event {
            WebViewEvent::PageLoad {
                state: PageLoadState::Started,
                url,
                ..
            } => {
                self.current_url = url.clone();
                self.history.start(url);
                true
            }
            WebViewEvent::PageLoad {
                state: PageLoadState::Finished,
                url,
                ..
            } => {
                self.current_url = url.clone();
                self.history.commit(url);
                self.ready = true;
                true
            }
            WebViewEvent::TitleChanged { title, .. } => {
                self.current_title = title.clone();
                true
            }
            _ => false,
        }
    }
}

/// Handle to a managed WebView instance. Provides methods to interact
/// with the underlying WebView (navigate, evaluate JS, resize, etc.).
pub struct WebViewHandle {
    /// The underlying wry WebView.
    pub(super) webview: WebView,
    pub(super) state: ViewState,
}

impl WebViewHandle {
    pub fn source(&self) -> ViewSource {
        self.state.source
    }

    /// Get the current URL.
    pub fn current_url(&self) -> &str {
        &self.state.current_url
    }

    /// Get the current title.
    pub fn current_title(&self) -> &str {
        &self.state.current_title
    }

    /// Whether the page has finished loading at least once.
    pub fn is_ready(&self) -> bool {
        self.state.ready
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.state.history
    }

    /// Navigate to a URL.
    pub fn load_url(&mut self, url: &str) -> Result<(), wry::Error> {
        self.state.current_url = url.to_string();
        self.state.history.cancel_pending();
        self.webview.load_url(url)
    }

    /// Send a typed IPC message to JavaScript.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), wry::Error> {
        let script = crate::ipc::js_dispatch_message(kind, payload);
        self.webview.evaluate_script(&script)
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Show or hide the WebView.
    pub fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)
    }

    /// Focus the WebView.
    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }

    pub fn apply_event(&mut self, event: &WebViewEvent) -> bool {
        self.state.apply(event)
    }

    fn traverse(&mut self, traversal: Traversal) {
        if !self.state.history.begin(traversal) {
            return;
        }
        let script = match traversal {
            Traversal::Back => "history.back();",
            Traversal::Forward => "history.forward();",
        };
        if let Err(e) = self.webview.evaluate_script(script) {
            warn!(source = %self.state.source, ?traversal, error = %e, "history traversal failed");
            self.state.history.cancel_pending();
        }
    }
}

impl ContentView for WebViewHandle {
    fn can_go_back(&self) -> bool {
        self.state.history.can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        self.state.history.can_go_forward()
    }

    fn go_back(&mut self) {
        self.traverse(Traversal::Back);
    }

    fn go_forward(&mut self) {
        self.traverse(Traversal::Forward);
    }

    fn reload(&mut self) {
        if let Err(e) = self.webview.evaluate_script("location.reload();") {
            warn!(source = %self.state.source, error = %e, "reload failed");
        }
    }
}
