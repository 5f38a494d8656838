pub mod errors;
pub mod id;
pub mod types;

pub use errors::{BrowserError, ConfigError};
pub use id::TabId;
pub use types::Rect;

pub type Result<T> = std::result::Result<T, BrowserError>;
