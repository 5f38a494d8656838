//! Browser window controller.
//!
//! Owns the tabs of one window, tracks which one is active, relays
//! navigation commands to it, and keeps the window chrome (title, toolbar)
//! in sync with its state. The embedded web content, the toolbar widgets,
//! and the native window are collaborators reached through the traits in
//! [`tab`], [`chrome`], and [`host`], so the controller itself is plain
//! single-threaded logic.

pub mod chrome;
pub mod commands;
pub mod host;
pub mod tab;
pub mod title;
pub mod window;

pub use chrome::{ChromeState, MenuBar, TabSummary, Toolbar};
pub use commands::BrowserCommand;
pub use host::HostWindow;
pub use tab::{ContentView, TabFactory, TabView};
pub use window::{BrowserWindow, TabSettings};
