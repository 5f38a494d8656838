mod address;
mod app_state;
mod cli;

use std::path::Path;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use hack_config::HackConfig;

/// Used when neither the CLI, `RUST_LOG`, nor the config supplies a directive.
const DEFAULT_LOG_DIRECTIVE: &str =
    "hackbrowser=info,hack_browser=info,hack_webview=info,hack_config=info";

/// Filter precedence: `--log-level`, then `RUST_LOG`, then `[logging] level`.
fn pick_log_directive(
    cli: Option<&str>,
    env: Option<&str>,
    config: Option<&HackConfig>,
) -> String {
    cli.or(env)
        .or_else(|| config.map(|c| c.logging.level.as_str()))
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(DEFAULT_LOG_DIRECTIVE)
        .to_string()
}

fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("invalid log directive {directive:?} ({e}), using {DEFAULT_LOG_DIRECTIVE}");
        EnvFilter::new(DEFAULT_LOG_DIRECTIVE)
    })
}

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Config is read before logging so its level can seed the filter.
    let config_path = args.config.as_deref().map(Path::new);
    let loaded = hack_config::load_config_from(config_path);

    let env_directive = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = pick_log_directive(
        args.log_level.as_deref(),
        env_directive.as_deref(),
        loaded.as_ref().ok(),
    );
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&directive))
        .init();

    tracing::info!("HackBrowser v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        HackConfig::default()
    });
    tracing::info!(home_page = %config.tabs.home_page, "Config loaded");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::BrowserApp::new(config, address::start_url(args.url.as_deref()));

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_directive_wins() {
        let config = HackConfig::default();
        let d = pick_log_directive(Some("debug"), Some("warn"), Some(&config));
        assert_eq!(d, "debug");
    }

    #[test]
    fn env_beats_config() {
        let config = HackConfig::default();
        let d = pick_log_directive(None, Some("warn"), Some(&config));
        assert_eq!(d, "warn");
    }

    #[test]
    fn config_level_used_without_overrides() {
        let mut config = HackConfig::default();
        config.logging.level = "hack_browser=trace".into();
        let d = pick_log_directive(None, None, Some(&config));
        assert_eq!(d, "hack_browser=trace");
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(pick_log_directive(None, None, None), DEFAULT_LOG_DIRECTIVE);
        assert_eq!(pick_log_directive(Some("  "), None, None), DEFAULT_LOG_DIRECTIVE);
    }

    #[test]
    fn default_directive_parses() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_DIRECTIVE).is_ok());
    }
}
