//! Toolbar contract and the toolbar state model.

use serde::Serialize;

use hack_common::TabId;

use crate::tab::ContentView;

/// Back/forward buttons and the URL field.
pub trait Toolbar {
    /// Set back/forward enablement from the view's history.
    fn update_nav_buttons(&mut self, view: &dyn ContentView);
    fn disable_back_button(&mut self);
    fn disable_forward_button(&mut self);
    fn update_url_field(&mut self, url: &str);
}

/// Toolbar state held in Rust and mirrored to the chrome UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuBar {
    back_enabled: bool,
    forward_enabled: bool,
    url: String,
}

impl MenuBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn back_enabled(&self) -> bool {
        self.back_enabled
    }

    pub fn forward_enabled(&self) -> bool {
        self.forward_enabled
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Toolbar for MenuBar {
    fn update_nav_buttons(&mut self, view: &dyn ContentView) {
        self.back_enabled = view.can_go_back();
        self.forward_enabled = view.can_go_forward();
    }

    fn disable_back_button(&mut self) {
        self.back_enabled = false;
    }

    fn disable_forward_button(&mut self) {
        self.forward_enabled = false;
    }

    fn update_url_field(&mut self, url: &str) {
        url.clone_into(&mut self.url);
    }
}

/// One entry of the tab strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabSummary {
    pub id: TabId,
    pub title: String,
    pub url: String,
    pub active: bool,
}

/// Everything the chrome UI renders, sent as one message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChromeState {
    pub back_enabled: bool,
    pub forward_enabled: bool,
    pub url: String,
    pub title: String,
    pub tabs: Vec<TabSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct History {
        back: bool,
        forward: bool,
    }

    impl ContentView for History {
        fn can_go_back(&self) -> bool {
            self.back
        }
        fn can_go_forward(&self) -> bool {
            self.forward
        }
        fn go_back(&mut self) {}
        fn go_forward(&mut self) {}
        fn reload(&mut self) {}
    }

    #[test]
    fn menu_bar_starts_disabled_and_empty() {
        let bar = MenuBar::new();
        assert!(!bar.back_enabled());
        assert!(!bar.forward_enabled());
        assert_eq!(bar.url(), "");
    }

    #[test]
    fn nav_buttons_follow_view_history() {
        let mut bar = MenuBar::new();
        bar.update_nav_buttons(&History {
            back: true,
            forward: false,
        });
        assert!(bar.back_enabled());
        assert!(!bar.forward_enabled());

        bar.update_nav_buttons(&History {
            back: false,
            forward: true,
        });
        assert!(!bar.back_enabled());
        assert!(bar.forward_enabled());
    }

    #[test]
    fn disable_buttons_individually() {
        let mut bar = MenuBar::new();
        bar.update_nav_buttons(&History {
            back: true,
            forward: true,
        });
        bar.disable_back_button();
        assert!(!bar.back_enabled());
        assert!(bar.forward_enabled());
        bar.disable_forward_button();
        assert!(!bar.forward_enabled());
    }

    #[test]
    fn url_field_updates() {
        let mut bar = MenuBar::new();
        bar.update_url_field("https://example.com/");
        assert_eq!(bar.url(), "https://example.com/");
    }

    #[test]
    fn chrome_state_serializes_for_the_ui() {
        let state = ChromeState {
            back_enabled: true,
            forward_enabled: false,
            url: "https://example.com/".into(),
            title: "Example - HackBrowser".into(),
            tabs: vec![TabSummary {
                id: TabId(1),
                title: "Example".into(),
                url: "https://example.com/".into(),
                active: true,
            }],
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["back_enabled"], true);
        assert_eq!(json["tabs"][0]["id"], 1);
        assert_eq!(json["tabs"][0]["active"], true);
    }
}
