//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use hack_browser::TabView;

use super::core::BrowserApp;
use super::layout::{rect_to_wry, split_viewport};

impl ApplicationHandler for BrowserApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.initialize_window(event_loop) {
            tracing::error!("Startup failed: {e}");
            self.shutdown();
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_webview_bounds();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit || self.close_requested() {
            self.shutdown();
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl BrowserApp {
    /// Re-apply the chrome and content bounds after the window changed size.
    pub(super) fn sync_webview_bounds(&mut self) {
        let Some(window) = self.window.clone() else {
            return;
        };
        let (width, height) = self.logical_size(&window);
        let (chrome_rect, content_rect) =
            split_viewport(width, height, self.config.window.toolbar_height as f64);

        if let Some(ref chrome) = self.chrome {
            if let Err(e) = chrome.set_bounds(rect_to_wry(&chrome_rect)) {
                tracing::warn!(error = %e, "Failed to resize chrome webview");
            }
        }

        let Some(ref mut browser) = self.browser else {
            return;
        };
        browser.factory_mut().set_content_bounds(content_rect);
        for tab in browser.tabs_mut() {
            if let Err(e) = tab.handle().set_bounds(rect_to_wry(&content_rect)) {
                tracing::warn!(tab_id = %tab.id(), error = %e, "Failed to resize tab webview");
            }
        }
    }
}
