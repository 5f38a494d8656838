use clap::Parser;

/// HackBrowser - a small tabbed web browser.
#[derive(Parser, Debug)]
#[command(name = "hackbrowser", version, about)]
pub struct Args {
    /// Page to open in the first tab instead of the configured home page.
    pub url: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter directive override (e.g. "debug" or "hack_browser=trace").
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        let args = Args::try_parse_from(["hackbrowser"]).unwrap();
        assert!(args.url.is_none());
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
    }

    #[test]
    fn positional_url_and_flags() {
        let args = Args::try_parse_from([
            "hackbrowser",
            "https://example.com/",
            "--config",
            "/tmp/hack.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.url.as_deref(), Some("https://example.com/"));
        assert_eq!(args.config.as_deref(), Some("/tmp/hack.toml"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }
}
