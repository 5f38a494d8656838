//! The native window as seen by the tab controller.

use std::sync::Arc;

use winit::window::Window;

use hack_browser::HostWindow;

/// Wraps the winit window. `close` only raises a flag; the event loop
/// notices it in `about_to_wait` and exits.
pub struct WinitHost {
    window: Arc<Window>,
    close_requested: bool,
}

impl WinitHost {
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            close_requested: false,
        }
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }
}

impl HostWindow for WinitHost {
    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn close(&mut self) {
        tracing::info!("Window close requested by browser");
        self.close_requested = true;
    }
}
