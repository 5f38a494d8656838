//! Window title formatting.

/// Placeholder replaced by the page title in a title template.
pub const TITLE_PLACEHOLDER: &str = "{title}";

/// Build the window title for a page.
///
/// A blank page title yields `fallback`. A template without the
/// placeholder is ignored and the page title is used as-is.
pub fn format_window_title(template: &str, fallback: &str, page_title: &str) -> String {
    let page_title = page_title.trim();
    if page_title.is_empty() {
        return fallback.to_string();
    }
    if template.contains(TITLE_PLACEHOLDER) {
        template.replace(TITLE_PLACEHOLDER, page_title)
    } else {
        page_title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_page_title() {
        assert_eq!(
            format_window_title("{title} - HackBrowser", "HackBrowser", "Google"),
            "Google - HackBrowser"
        );
    }

    #[test]
    fn blank_title_uses_fallback() {
        assert_eq!(
            format_window_title("{title} - HackBrowser", "HackBrowser", "   "),
            "HackBrowser"
        );
    }

    #[test]
    fn template_without_placeholder_passes_title_through() {
        assert_eq!(format_window_title("static", "HackBrowser", "Docs"), "Docs");
    }
}
