use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a tab within one browser window.
///
/// Ids are handed out from the window's lifetime creation counter, so they
/// are never reused while the window lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(pub u32);

impl TabId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for TabId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab-{}", self.0)
    }
}
