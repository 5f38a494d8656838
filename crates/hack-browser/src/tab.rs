//! Tab and content-view contracts.

use hack_common::{Result, TabId};

/// The embedded browser widget behind a tab.
pub trait ContentView {
    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    fn go_back(&mut self);
    fn go_forward(&mut self);
    fn reload(&mut self);
}

/// One tab: a content view plus the state the chrome reads from it.
///
/// History queries on the content view are only meaningful once
/// [`is_ready`](TabView::is_ready) returns `true`.
pub trait TabView {
    type View: ContentView;

    fn id(&self) -> TabId;
    fn navigate_to(&mut self, url: &str);
    /// Make the tab visible and give it focus.
    fn activate(&mut self);
    fn deactivate(&mut self);
    fn is_ready(&self) -> bool;
    fn title_text(&self) -> &str;
    fn current_url(&self) -> &str;
    fn content_view(&self) -> &Self::View;
    fn content_view_mut(&mut self) -> &mut Self::View;
}

/// Creates tabs for a window. The window picks the id; the factory builds
/// the tab around it.
pub trait TabFactory {
    type Tab: TabView;

    fn create_tab(&mut self, id: TabId, url: &str) -> Result<Self::Tab>;
}
