use hack_common::TabId;

/// User-triggerable actions on a browser window.
///
/// Chrome IPC messages resolve to a `BrowserCommand`, which
/// [`BrowserWindow::execute`](crate::BrowserWindow::execute) routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserCommand {
    /// Open a blank tab and switch to it (the "add tab" button).
    NewTab,
    OpenTab { url: String, activate: bool },
    ActivateTab(TabId),
    CloseTab(TabId),
    CloseActiveTab,
    Navigate(String),
    GoBack,
    GoForward,
    Reload,
}
