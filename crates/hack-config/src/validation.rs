//! Full configuration validation.
//!
//! Checks numeric ranges and required strings, collecting every error
//! rather than stopping at the first.

use crate::schema::HackConfig;
use hack_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HackConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    // Window constraints
    validate_range(&mut errors, "window.width", config.window.width, 320, 7680);
    validate_range(&mut errors, "window.height", config.window.height, 240, 4320);
    validate_range(
        &mut errors,
        "window.toolbar_height",
        config.window.toolbar_height,
        32,
        200,
    );
    validate_not_blank(&mut errors, "window.title", &config.window.title);
    validate_not_blank(&mut errors, "window.title_template", &config.window.title_template);

    // Tabs
    validate_not_blank(&mut errors, "tabs.home_page", &config.tabs.home_page);
    validate_not_blank(&mut errors, "tabs.new_tab_url", &config.tabs.new_tab_url);

    // Logging
    validate_not_blank(&mut errors, "logging.level", &config.logging.level);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_not_blank(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = HackConfig::default();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn catches_window_too_small() {
        let mut config = HackConfig::default();
        config.window.width = 100;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("window.width"));
    }

    #[test]
    fn catches_toolbar_height_out_of_range() {
        let mut config = HackConfig::default();
        config.window.toolbar_height = 500;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("window.toolbar_height"));
    }

    #[test]
    fn catches_blank_home_page() {
        let mut config = HackConfig::default();
        config.tabs.home_page = "   ".into();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("tabs.home_page must not be empty"));
    }

    #[test]
    fn collects_multiple_errors() {
        let mut config = HackConfig::default();
        config.window.height = 0;
        config.tabs.new_tab_url = String::new();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("window.height"));
        assert!(err.contains("tabs.new_tab_url"));
        assert!(err.contains("; "));
    }
}
