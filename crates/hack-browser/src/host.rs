/// The native window that owns the controller.
pub trait HostWindow {
    fn set_title(&mut self, title: &str);
    /// Ask the host to close the window.
    fn close(&mut self);
}
