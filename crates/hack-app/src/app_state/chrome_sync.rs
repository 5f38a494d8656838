//! Pushes toolbar and tab strip state to the chrome webview.

use hack_browser::ChromeState;

use super::core::BrowserApp;

/// Decide whether `current` needs sending given what was sent last.
pub fn needs_push(last: Option<&ChromeState>, current: &ChromeState) -> bool {
    last != Some(current)
}

impl BrowserApp {
    /// Send `chrome_state` to the chrome page if anything changed.
    ///
    /// Nothing is sent before the page reports `chrome_ready`.
    pub(super) fn sync_chrome_state(&mut self) {
        if !self.chrome_ready {
            return;
        }
        let (Some(chrome), Some(browser)) = (&self.chrome, &self.browser) else {
            return;
        };

        let state = browser.chrome_state();
        if !needs_push(self.pushed_chrome_state.as_ref(), &state) {
            return;
        }

        let payload = match serde_json::to_value(&state) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize chrome state");
                return;
            }
        };
        if let Err(e) = chrome.send_ipc("chrome_state", &payload) {
            tracing::warn!(error = %e, "Failed to push chrome state");
            return;
        }
        tracing::debug!(tabs = state.tabs.len(), url = %state.url, "Chrome state pushed");
        self.pushed_chrome_state = Some(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hack_browser::TabSummary;
    use hack_common::TabId;

    fn state(url: &str) -> ChromeState {
        ChromeState {
            back_enabled: false,
            forward_enabled: false,
            url: url.into(),
            title: "HackBrowser".into(),
            tabs: vec![TabSummary {
                id: TabId(1),
                title: url.into(),
                url: url.into(),
                active: true,
            }],
        }
    }

    #[test]
    fn first_state_is_always_pushed() {
        assert!(needs_push(None, &ChromeState::default()));
    }

    #[test]
    fn unchanged_state_is_not_pushed() {
        let s = state("https://a.example/");
        assert!(!needs_push(Some(&s), &s.clone()));
    }

    #[test]
    fn changes_are_pushed() {
        let last = state("https://a.example/");
        let mut next = last.clone();
        next.back_enabled = true;
        assert!(needs_push(Some(&last), &next));
        assert!(needs_push(Some(&last), &state("https://b.example/")));
    }
}
