//! The per-window tab controller.

use std::collections::HashMap;

use tracing::{debug, info};

use hack_common::{Result, TabId};
use hack_config::HackConfig;

use crate::chrome::{ChromeState, MenuBar, TabSummary, Toolbar};
use crate::commands::BrowserCommand;
use crate::host::HostWindow;
use crate::tab::{ContentView, TabFactory, TabView};
use crate::title::format_window_title;

/// Window-level defaults the controller needs from config.
#[derive(Debug, Clone)]
pub struct TabSettings {
    /// URL of the tab opened when the window starts.
    pub home_page: String,
    /// URL used when a tab is added without a target.
    pub new_tab_url: String,
    /// Window title shown when the active page has no title.
    pub window_title: String,
    pub title_template: String,
}

impl TabSettings {
    pub fn from_config(config: &HackConfig) -> Self {
        Self {
            home_page: config.tabs.home_page.clone(),
            new_tab_url: config.tabs.new_tab_url.clone(),
            window_title: config.window.title.clone(),
            title_template: config.window.title_template.clone(),
        }
    }
}

impl Default for TabSettings {
    fn default() -> Self {
        Self::from_config(&HackConfig::default())
    }
}

/// Owns the tabs of one browser window and mediates chrome-to-tab commands.
///
/// At most one tab is active, and the active id always refers to a live tab.
/// Closing the last tab asks the host to close the window, once.
pub struct BrowserWindow<F: TabFactory, T: Toolbar, H: HostWindow> {
    factory: F,
    toolbar: T,
    host: H,
    settings: TabSettings,
    /// Tabs ever created. Also the source of new tab ids.
    created_tab_count: u32,
    open_tab_count: u32,
    tabs: HashMap<TabId, F::Tab>,
    /// Open tab ids in strip order.
    order: Vec<TabId>,
    active: Option<TabId>,
    window_title: String,
    window_closed: bool,
}

impl<F: TabFactory, T: Toolbar, H: HostWindow> BrowserWindow<F, T, H> {
    /// Create the controller and open the home page in an active tab.
    pub fn new(factory: F, toolbar: T, host: H, settings: TabSettings) -> Result<Self> {
        Self::with_start_page(factory, toolbar, host, settings, None)
    }

    /// Like [`new`](Self::new), but the first tab opens `start_url` when given.
    pub fn with_start_page(
        factory: F,
        toolbar: T,
        host: H,
        settings: TabSettings,
        start_url: Option<&str>,
    ) -> Result<Self> {
        let first_url = start_url
            .map(str::to_owned)
            .unwrap_or_else(|| settings.home_page.clone());

        let mut window = Self {
            factory,
            toolbar,
            host,
            window_title: settings.window_title.clone(),
            settings,
            created_tab_count: 0,
            open_tab_count: 0,
            tabs: HashMap::new(),
            order: Vec::new(),
            active: None,
            window_closed: false,
        };

        window.add_tab(Some(&first_url), true)?;
        Ok(window)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn toolbar(&self) -> &T {
        &self.toolbar
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    pub fn active_tab_id(&self) -> Option<TabId> {
        self.active
    }

    pub fn active_tab(&self) -> Option<&F::Tab> {
        self.active.and_then(|id| self.tabs.get(&id))
    }

    pub fn active_tab_mut(&mut self) -> Option<&mut F::Tab> {
        self.active.and_then(|id| self.tabs.get_mut(&id))
    }

    pub fn created_tab_count(&self) -> u32 {
        self.created_tab_count
    }

    pub fn open_tab_count(&self) -> u32 {
        self.open_tab_count
    }

    pub fn tab(&self, id: TabId) -> Option<&F::Tab> {
        self.tabs.get(&id)
    }

    pub fn tab_mut(&mut self, id: TabId) -> Option<&mut F::Tab> {
        self.tabs.get_mut(&id)
    }

    /// Open tab ids in strip order.
    pub fn tab_ids(&self) -> &[TabId] {
        &self.order
    }

    pub fn tabs_mut(&mut self) -> impl Iterator<Item = &mut F::Tab> {
        self.tabs.values_mut()
    }

    /// The last title handed to the host window.
    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    pub fn is_window_closed(&self) -> bool {
        self.window_closed
    }

    // -----------------------------------------------------------------------
    // Tabs
    // -----------------------------------------------------------------------

    /// Open a tab on `url` (or the new-tab page) and optionally switch to it.
    ///
    /// The target is not validated; bad URLs surface in the content view.
    pub fn add_tab(&mut self, url: Option<&str>, activate: bool) -> Result<TabId> {
        let id = TabId(self.created_tab_count + 1);
        let url = url.unwrap_or(self.settings.new_tab_url.as_str());

        let tab = self.factory.create_tab(id, url)?;
        self.created_tab_count += 1;
        info!(tab_id = %id, url = %url, activate, "tab created");

        self.tabs.insert(id, tab);
        self.order.push(id);

        if activate {
            self.activate_tab(id);
        }

        self.open_tab_count += 1;
        Ok(id)
    }

    /// Switch to the tab with `id`.
    ///
    /// Returns `false` without touching anything when the tab is already
    /// active or does not exist.
    pub fn activate_tab(&mut self, id: TabId) -> bool {
        debug!(tab_id = %id, "activate tab");

        if self.active == Some(id) {
            debug!(tab_id = %id, "already active tab");
            return false;
        }

        if !self.tabs.contains_key(&id) {
            debug!(tab_id = %id, "activate ignored: unknown tab");
            return false;
        }

        if let Some(previous) = self.active.and_then(|prev| self.tabs.get_mut(&prev)) {
            previous.deactivate();
        }

        self.active = Some(id);
        if let Some(tab) = self.tabs.get_mut(&id) {
            tab.activate();
        }

        self.refresh_chrome();
        true
    }

    /// Remove the tab with `id`.
    ///
    /// If it was active, the neighbouring tab in the strip takes over. When
    /// no tabs remain the host window is asked to close.
    pub fn close_tab(&mut self, id: TabId) -> bool {
        let Some(index) = self.order.iter().position(|t| *t == id) else {
            debug!(tab_id = %id, "close ignored: unknown tab");
            return false;
        };

        self.order.remove(index);
        self.tabs.remove(&id);
        self.open_tab_count = self.open_tab_count.saturating_sub(1);
        info!(tab_id = %id, open = self.open_tab_count, "tab closed");

        if self.active == Some(id) {
            self.active = None;
            if !self.order.is_empty() {
                let successor = self.order[index.min(self.order.len() - 1)];
                self.activate_tab(successor);
            }
        }

        if self.open_tab_count == 0 {
            self.request_window_close();
        }
        true
    }

    fn request_window_close(&mut self) {
        if self.window_closed {
            return;
        }
        self.window_closed = true;
        info!("last tab closed, closing window");
        self.host.close();
    }

    // -----------------------------------------------------------------------
    // Chrome
    // -----------------------------------------------------------------------

    /// Sync toolbar and window title with the active tab.
    pub fn refresh_chrome(&mut self) {
        let Some(tab) = self.active.and_then(|id| self.tabs.get(&id)) else {
            return;
        };

        // History is only queryable once the view has loaded.
        if tab.is_ready() {
            self.toolbar.update_nav_buttons(tab.content_view());
        } else {
            self.toolbar.disable_back_button();
            self.toolbar.disable_forward_button();
        }

        self.toolbar.update_url_field(tab.current_url());
        let title = tab.title_text().to_string();
        self.update_window_title(&title);
    }

    pub fn update_window_title(&mut self, page_title: &str) {
        self.window_title = format_window_title(
            &self.settings.title_template,
            &self.settings.window_title,
            page_title,
        );
        self.host.set_title(&self.window_title);
    }

    /// A tab finished loading. Refreshes chrome if it is the active tab.
    pub fn on_tab_loaded(&mut self, id: TabId) -> bool {
        if self.active != Some(id) {
            return false;
        }
        self.refresh_chrome();
        true
    }

    /// A tab's title changed. Refreshes chrome if it is the active tab.
    pub fn on_tab_title_changed(&mut self, id: TabId) -> bool {
        self.on_tab_loaded(id)
    }

    /// Tab strip entries in display order.
    pub fn tab_strip(&self) -> Vec<TabSummary> {
        self.order
            .iter()
            .filter_map(|id| self.tabs.get(id))
            .map(|tab| TabSummary {
                id: tab.id(),
                title: tab.title_text().to_string(),
                url: tab.current_url().to_string(),
                active: self.active == Some(tab.id()),
            })
            .collect()
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    pub fn navigate(&mut self, url: &str) -> bool {
        match self.active_tab_mut() {
            Some(tab) => {
                tab.navigate_to(url);
                true
            }
            None => {
                debug!(url = %url, "navigate ignored: no active tab");
                false
            }
        }
    }

    pub fn go_back(&mut self) -> bool {
        match self.active_tab_mut() {
            Some(tab) if tab.is_ready() && tab.content_view().can_go_back() => {
                tab.content_view_mut().go_back();
                true
            }
            _ => false,
        }
    }

    pub fn go_forward(&mut self) -> bool {
        match self.active_tab_mut() {
            Some(tab) if tab.is_ready() && tab.content_view().can_go_forward() => {
                tab.content_view_mut().go_forward();
                true
            }
            _ => false,
        }
    }

    pub fn reload(&mut self) -> bool {
        match self.active_tab_mut() {
            Some(tab) => {
                tab.content_view_mut().reload();
                true
            }
            None => false,
        }
    }

    // -----------------------------------------------------------------------
    // Command dispatch
    // -----------------------------------------------------------------------

    /// Execute a browser command. Returns `true` if it changed anything.
    pub fn execute(&mut self, cmd: BrowserCommand) -> Result<bool> {
        let handled = match cmd {
            BrowserCommand::NewTab => {
                self.add_tab(None, true)?;
                true
            }
            BrowserCommand::OpenTab { url, activate } => {
                self.add_tab(Some(&url), activate)?;
                true
            }
            BrowserCommand::ActivateTab(id) => self.activate_tab(id),
            BrowserCommand::CloseTab(id) => self.close_tab(id),
            BrowserCommand::CloseActiveTab => match self.active {
                Some(id) => self.close_tab(id),
                None => false,
            },
            BrowserCommand::Navigate(url) => self.navigate(&url),
            BrowserCommand::GoBack => self.go_back(),
            BrowserCommand::GoForward => self.go_forward(),
            BrowserCommand::Reload => self.reload(),
        };
        Ok(handled)
    }
}

impl<F: TabFactory, H: HostWindow> BrowserWindow<F, MenuBar, H> {
    /// Snapshot of everything the chrome UI shows.
    pub fn chrome_state(&self) -> ChromeState {
        ChromeState {
            back_enabled: self.toolbar.back_enabled(),
            forward_enabled: self.toolbar.forward_enabled(),
            url: self.toolbar.url().to_string(),
            title: self.window_title.clone(),
            tabs: self.tab_strip(),
        }
    }
}
