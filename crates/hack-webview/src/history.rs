//! Back/forward history for a webview, rebuilt from page-load events.
//!
//! The platform engines keep the real session history, but `wry` gives no
//! way to ask whether back or forward is possible. We mirror it: every
//! finished load is committed here, and traversals started through the
//! handle are marked pending so the next commit moves the cursor instead of
//! pushing a new entry. Same-document navigations (hash changes,
//! `pushState`) don't fire page loads and are not tracked; a traversal that
//! stays in the document is dropped when the next load starts elsewhere.

/// Entries kept before the oldest ones are dropped.
pub const MAX_ENTRIES: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    Back,
    Forward,
}

#[derive(Debug, Clone, Default)]
pub struct NavigationHistory {
    entries: Vec<String>,
    index: Option<usize>,
    pending: Option<Traversal>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current(&self) -> Option<&str> {
        self.index.map(|i| self.entries[i].as_str())
    }

    pub fn pending(&self) -> Option<Traversal> {
        self.pending
    }

    pub fn can_go_back(&self) -> bool {
        self.target(Traversal::Back).is_some()
    }

    pub fn can_go_forward(&self) -> bool {
        self.target(Traversal::Forward).is_some()
    }

    /// Mark a traversal as in flight. Returns `false` if there is nowhere to go.
    pub fn begin(&mut self, traversal: Traversal) -> bool {
        if self.target(traversal).is_none() {
            return false;
        }
        self.pending = Some(traversal);
        true
    }

    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// A load of `url` started. A pending traversal survives only if this is
    /// the page it was heading for.
    pub fn start(&mut self, url: &str) {
        let Some(target) = self.pending.and_then(|t| self.target(t)) else {
            return;
        };
        if self.entries[target] != url {
            self.pending = None;
        }
    }

    /// Record a finished load of `url`.
    pub fn commit(&mut self, url: &str) {
        if let Some(target) = self.pending.take().and_then(|t| self.target(t)) {
            self.index = Some(target);
            if self.entries[target] != url {
                // Redirected while traversing: keep what actually loaded.
                self.entries[target] = url.to_string();
            }
            return;
        }

        if self.current() == Some(url) {
            return;
        }

        let keep = self.index.map_or(0, |i| i + 1);
        self.entries.truncate(keep);
        self.entries.push(url.to_string());

        if self.entries.len() > MAX_ENTRIES {
            self.entries.remove(0);
        }
        self.index = Some(self.entries.len() - 1);
    }

    fn target(&self, traversal: Traversal) -> Option<usize> {
        let i = self.index?;
        match traversal {
            Traversal::Back => i.checked_sub(1),
            Traversal::Forward => (i + 1 < self.entries.len()).then_some(i + 1),
        }
    }
}
