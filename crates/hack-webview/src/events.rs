//! WebView event types.

use std::fmt;

use serde::{Deserialize, Serialize};

use hack_common::TabId;

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Which webview an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewSource {
    /// The toolbar / tab strip view.
    Chrome,
    Tab(TabId),
}

impl fmt::Display for ViewSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chrome => f.write_str("chrome"),
            Self::Tab(id) => write!(f, "{id}"),
        }
    }
}

/// Events emitted by a WebView instance.
#[derive(Debug, Clone, PartialEq)]
pub enum WebViewEvent {
    /// Page load state changed. Carries the URL.
    PageLoad {
        source: ViewSource,
        state: PageLoadState,
        url: String,
    },
    /// Document title changed.
    TitleChanged { source: ViewSource, title: String },
    /// An IPC message was received from JavaScript.
    IpcMessage { source: ViewSource, body: String },
    /// A navigation was requested inside the view.
    NavigationRequested { source: ViewSource, url: String },
    /// The page asked for a new window (`target="_blank"`, `window.open`).
    NewWindowRequested { source: ViewSource, url: String },
}

impl WebViewEvent {
    pub fn source(&self) -> ViewSource {
        match self {
            Self::PageLoad { source, .. }
            | Self::TitleChanged { source, .. }
            | Self::IpcMessage { source, .. }
            | Self::NavigationRequested { source, .. }
            | Self::NewWindowRequested { source, .. } => *source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_source_display() {
        assert_eq!(ViewSource::Chrome.to_string(), "chrome");
        assert_eq!(ViewSource::Tab(TabId(4)).to_string(), "tab-4");
    }

    #[test]
    fn event_source_is_extracted() {
        let event = WebViewEvent::TitleChanged {
            source: ViewSource::Tab(TabId(2)),
            title: "Docs".into(),
        };
        assert_eq!(event.source(), ViewSource::Tab(TabId(2)));

        let event = WebViewEvent::IpcMessage {
            source: ViewSource::Chrome,
            body: "{}".into(),
        };
        assert_eq!(event.source(), ViewSource::Chrome);
    }

    #[test]
    fn page_load_state_from_wry() {
        assert_eq!(
            PageLoadState::from(wry::PageLoadEvent::Started),
            PageLoadState::Started
        );
        assert_eq!(
            PageLoadState::from(wry::PageLoadEvent::Finished),
            PageLoadState::Finished
        );
    }
}
