//! Address-bar input to loadable URLs.

use url::Url;

/// Turn typed text into a URL the webview can load.
///
/// Text that already parses with a scheme is kept (`about:`, `mailto:`,
/// `view-source:`, ...). Anything else is tried again as an `http://`
/// address, which covers bare hosts and `host:port`.
pub fn url_from_input(input: &str) -> Result<String, &'static str> {
    let input = input.trim();
    if input.is_empty() {
        return Err("empty URL");
    }

    if let Ok(url) = Url::parse(input) {
        if !is_host_and_port(&url) {
            return Ok(url.into());
        }
    }

    Url::parse(&format!("http://{input}"))
        .map(Into::into)
        .map_err(|_| "unparseable URL")
}

/// `localhost:8080` parses as scheme `localhost` with path `8080`.
fn is_host_and_port(url: &Url) -> bool {
    if !url.cannot_be_a_base() {
        return false;
    }
    let port = url.path().split('/').next().unwrap_or_default();
    !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())
}

/// Normalize the start page given on the command line.
///
/// An unusable address is logged and dropped so the configured home page
/// opens instead.
pub fn start_url(arg: Option<&str>) -> Option<String> {
    let arg = arg?;
    match url_from_input(arg) {
        Ok(url) => Some(url),
        Err(reason) => {
            tracing::warn!(url = %arg, reason, "Ignoring start URL");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hosts_get_http() {
        assert_eq!(url_from_input("example.com").unwrap(), "http://example.com/");
        assert_eq!(
            url_from_input("  example.com/a?b=1 ").unwrap(),
            "http://example.com/a?b=1"
        );
    }

    #[test]
    fn host_and_port_is_not_a_scheme() {
        assert_eq!(
            url_from_input("localhost:8080").unwrap(),
            "http://localhost:8080/"
        );
        assert_eq!(
            url_from_input("example.com:8080/docs").unwrap(),
            "http://example.com:8080/docs"
        );
        assert_eq!(
            url_from_input("127.0.0.1:3000").unwrap(),
            "http://127.0.0.1:3000/"
        );
    }

    #[test]
    fn schemes_are_kept() {
        assert_eq!(url_from_input("about:blank").unwrap(), "about:blank");
        assert_eq!(
            url_from_input("mailto:a@b.example").unwrap(),
            "mailto:a@b.example"
        );
        assert_eq!(
            url_from_input("view-source:https://example.com/").unwrap(),
            "view-source:https://example.com/"
        );
        assert_eq!(
            url_from_input("https://example.com/path").unwrap(),
            "https://example.com/path"
        );
    }

    #[test]
    fn file_urls_are_normalized() {
        assert_eq!(url_from_input("file:/tmp/a.html").unwrap(), "file:///tmp/a.html");
        assert_eq!(url_from_input("file:///tmp/a.html").unwrap(), "file:///tmp/a.html");
    }

    #[test]
    fn unusable_input_is_an_error() {
        assert_eq!(url_from_input(""), Err("empty URL"));
        assert_eq!(url_from_input("   "), Err("empty URL"));
        assert_eq!(url_from_input("a b"), Err("unparseable URL"));
    }

    #[test]
    fn start_url_is_normalized() {
        assert_eq!(start_url(None), None);
        assert_eq!(
            start_url(Some("localhost:8080")).as_deref(),
            Some("http://localhost:8080/")
        );
        assert_eq!(start_url(Some("a b")), None);
    }
}
