//! IPC message validation and dispatch from the chrome webview.

use hack_browser::BrowserCommand;
use hack_common::TabId;
use hack_webview::IpcMessage;

use crate::address::url_from_input;

use super::core::BrowserApp;

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Allowed IPC message kinds from the chrome page.
///
/// Any message with a `kind` not in this list is rejected and logged.
const ALLOWED_IPC_KINDS: &[&str] = &[
    "chrome_ready",
    "new_tab",
    "activate_tab",
    "close_tab",
    "navigate",
    "go_back",
    "go_forward",
    "reload",
];

/// Check whether an IPC message kind is in the allowlist.
pub fn is_ipc_kind_allowed(kind: &str) -> bool {
    ALLOWED_IPC_KINDS.contains(&kind)
}

// =============================================================================
// PARSING
// =============================================================================

/// What the chrome page asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChromeRequest {
    /// The page loaded its script and wants the current state.
    Ready,
    Command(BrowserCommand),
}

/// Turn a chrome IPC message into a request.
///
/// `Err` carries a short reason for the log line.
pub fn parse_chrome_request(msg: &IpcMessage) -> Result<ChromeRequest, &'static str> {
    if !is_ipc_kind_allowed(&msg.kind) {
        return Err("unknown kind");
    }

    let command = match msg.kind.as_str() {
        "chrome_ready" => return Ok(ChromeRequest::Ready),
        "new_tab" => BrowserCommand::NewTab,
        "activate_tab" => BrowserCommand::ActivateTab(tab_id_payload(msg)?),
        "close_tab" => BrowserCommand::CloseTab(tab_id_payload(msg)?),
        "navigate" => {
            let input = msg.payload.as_str().ok_or("navigate needs a URL string")?;
            let url = url_from_input(input)?;
            BrowserCommand::Navigate(url)
        }
        "go_back" => BrowserCommand::GoBack,
        "go_forward" => BrowserCommand::GoForward,
        "reload" => BrowserCommand::Reload,
        _ => return Err("unknown kind"),
    };
    Ok(ChromeRequest::Command(command))
}

fn tab_id_payload(msg: &IpcMessage) -> Result<TabId, &'static str> {
    msg.payload
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .map(TabId)
        .ok_or("expected a numeric tab id")
}

// =============================================================================
// DISPATCH
// =============================================================================

impl BrowserApp {
    /// Handle a single IPC message from the chrome webview.
    pub(super) fn handle_chrome_ipc(&mut self, body: &str) {
        let msg = match IpcMessage::from_json(body) {
            Some(m) => m,
            None => {
                tracing::warn!(body_len = body.len(), "IPC message rejected: failed to parse");
                return;
            }
        };

        let request = match parse_chrome_request(&msg) {
            Ok(r) => r,
            Err(reason) => {
                tracing::warn!(kind = %msg.kind, reason, "IPC message rejected");
                return;
            }
        };

        tracing::debug!(kind = %msg.kind, "IPC message dispatched");

        match request {
            ChromeRequest::Ready => {
                self.chrome_ready = true;
                self.pushed_chrome_state = None;
            }
            ChromeRequest::Command(cmd) => {
                let Some(ref mut browser) = self.browser else {
                    return;
                };
                if let Err(e) = browser.execute(cmd) {
                    tracing::warn!(error = %e, "Browser command failed");
                }
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<ChromeRequest, &'static str> {
        let msg = IpcMessage::from_json(raw).expect("valid IPC JSON");
        parse_chrome_request(&msg)
    }

    #[test]
    fn allowlist_contains_every_chrome_kind() {
        for kind in [
            "chrome_ready",
            "new_tab",
            "activate_tab",
            "close_tab",
            "navigate",
            "go_back",
            "go_forward",
            "reload",
        ] {
            assert!(is_ipc_kind_allowed(kind), "{kind} should be allowed");
        }
    }

    #[test]
    fn unknown_kinds_are_rejected() {
        assert!(!is_ipc_kind_allowed("eval"));
        assert!(!is_ipc_kind_allowed(""));
        assert!(!is_ipc_kind_allowed("NEW_TAB"));
        assert_eq!(parse(r#"{"kind":"pty_input","payload":"ls"}"#), Err("unknown kind"));
    }

    #[test]
    fn simple_commands() {
        assert_eq!(
            parse(r#"{"kind":"new_tab"}"#),
            Ok(ChromeRequest::Command(BrowserCommand::NewTab))
        );
        assert_eq!(
            parse(r#"{"kind":"go_back","payload":null}"#),
            Ok(ChromeRequest::Command(BrowserCommand::GoBack))
        );
        assert_eq!(
            parse(r#"{"kind":"go_forward"}"#),
            Ok(ChromeRequest::Command(BrowserCommand::GoForward))
        );
        assert_eq!(
            parse(r#"{"kind":"reload"}"#),
            Ok(ChromeRequest::Command(BrowserCommand::Reload))
        );
        assert_eq!(parse(r#"{"kind":"chrome_ready"}"#), Ok(ChromeRequest::Ready));
    }

    #[test]
    fn tab_commands_take_numeric_ids() {
        assert_eq!(
            parse(r#"{"kind":"activate_tab","payload":3}"#),
            Ok(ChromeRequest::Command(BrowserCommand::ActivateTab(TabId(3))))
        );
        assert_eq!(
            parse(r#"{"kind":"close_tab","payload":"2"}"#),
            Ok(ChromeRequest::Command(BrowserCommand::CloseTab(TabId(2))))
        );
    }

    #[test]
    fn malformed_tab_ids_are_rejected() {
        assert!(parse(r#"{"kind":"activate_tab"}"#).is_err());
        assert!(parse(r#"{"kind":"close_tab","payload":"tab"}"#).is_err());
        assert!(parse(r#"{"kind":"close_tab","payload":-1}"#).is_err());
        assert!(parse(r#"{"kind":"close_tab","payload":4294967296}"#).is_err());
    }

    #[test]
    fn navigate_needs_a_url() {
        assert_eq!(
            parse(r#"{"kind":"navigate","payload":"https://example.com/"}"#),
            Ok(ChromeRequest::Command(BrowserCommand::Navigate(
                "https://example.com/".into()
            )))
        );
        assert!(parse(r#"{"kind":"navigate","payload":"   "}"#).is_err());
        assert!(parse(r#"{"kind":"navigate","payload":{"url":"x"}}"#).is_err());
    }

    #[test]
    fn navigate_input_is_normalized() {
        assert_eq!(
            parse(r#"{"kind":"navigate","payload":"localhost:8080"}"#),
            Ok(ChromeRequest::Command(BrowserCommand::Navigate(
                "http://localhost:8080/".into()
            )))
        );
        assert_eq!(
            parse(r#"{"kind":"navigate","payload":"a b"}"#),
            Err("unparseable URL")
        );
    }
}
