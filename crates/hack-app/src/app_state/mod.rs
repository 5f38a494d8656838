//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the chrome webview and the tab controller,
//! and routes webview events between them.

mod chrome_sync;
mod core;
mod event_handler;
mod host;
mod init;
mod ipc_dispatch;
mod layout;
mod polling;
mod shutdown;
mod tab_factory;

pub use core::BrowserApp;
