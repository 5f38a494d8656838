//! WebView layer for HackBrowser tabs and chrome.
//!
//! Wraps the `wry` crate to provide:
//! - Child WebViews for tab content and for the toolbar UI
//! - Bidirectional IPC (Rust <-> JavaScript)
//! - Event capture (page load, title change, navigation, new-window requests)
//! - Best-effort back/forward history tracking, which `wry` does not expose

pub mod events;
pub mod history;
pub mod ipc;
pub mod manager;
pub mod tab;

pub use events::{PageLoadState, ViewSource, WebViewEvent};
pub use history::{NavigationHistory, Traversal};
pub use ipc::{IpcMessage, IpcPayload};
pub use manager::{ViewState, WebViewConfig, WebViewHandle, WebViewManager};
pub use tab::WebTab;

use hack_common::BrowserError;

/// Map a `wry` failure into the shared error type.
pub fn to_browser_error(err: wry::Error) -> BrowserError {
    BrowserError::WebView(err.to_string())
}
