//! Window creation, chrome webview, and tab controller setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use hack_browser::{BrowserWindow, MenuBar, TabSettings};
use hack_common::{BrowserError, Result};
use hack_webview::ipc::IPC_INIT_SCRIPT;
use hack_webview::{to_browser_error, ViewSource, WebViewConfig};

use super::core::BrowserApp;
use super::host::WinitHost;
use super::layout::{rect_to_wry, split_viewport};
use super::tab_factory::WryTabFactory;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Toolbar and tab strip page, compiled into the binary.
const CHROME_HTML: &str = include_str!("../../assets/chrome.html");

// =============================================================================
// INITIALIZATION
// =============================================================================

impl BrowserApp {
    /// Create the window, the chrome webview and the first tab.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| BrowserError::Other(format!("failed to create window: {e}")))?;

        let (width, height) = self.logical_size(&window);
        let (chrome_rect, content_rect) =
            split_viewport(width, height, self.config.window.toolbar_height as f64);

        let chrome_config = WebViewConfig {
            init_script: Some(IPC_INIT_SCRIPT),
            devtools: self.config.webview.devtools,
            ..WebViewConfig::with_html(CHROME_HTML)
        };
        let chrome = self
            .webviews
            .create(
                ViewSource::Chrome,
                window.as_ref(),
                rect_to_wry(&chrome_rect),
                chrome_config,
            )
            .map_err(to_browser_error)?;

        let factory = WryTabFactory::new(
            Arc::clone(&window),
            self.webviews.clone(),
            self.config.webview.clone(),
            content_rect,
        );
        let browser = BrowserWindow::with_start_page(
            factory,
            MenuBar::new(),
            WinitHost::new(Arc::clone(&window)),
            TabSettings::from_config(&self.config),
            self.start_url.as_deref(),
        )?;

        self.chrome = Some(chrome);
        self.browser = Some(browser);
        self.window = Some(window);
        tracing::info!("Window created and browser initialized");
        Ok(())
    }

    /// Inner size of `window` in logical pixels.
    pub(super) fn logical_size(&self, window: &winit::window::Window) -> (f64, f64) {
        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        (size.width, size.height)
    }
}
