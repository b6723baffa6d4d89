//! Default values for configuration fields.
//!
//! Each function backs a `#[serde(default = ...)]` attribute in
//! [`super::types`] so that partially specified configuration files pick up
//! the same values as a missing file.

use std::path::PathBuf;

/// Default log level: "info".
pub fn default_log_level_spec() -> String {
    "info".to_string()
}

/// Default log file path: none (file logging disabled).
pub fn default_log_file_path_spec() -> Option<PathBuf> {
    None
}

/// Default log format for file output: "text".
pub fn default_log_format_spec() -> String {
    "text".to_string()
}

/// Default number of applications per listing page.
pub fn default_page_size() -> usize {
    20
}

/// Keyboard shortcuts are registered by default.
pub fn default_keyboard_shortcuts() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        assert_eq!(default_log_level_spec(), "info");
        assert_eq!(default_log_file_path_spec(), None);
        assert_eq!(default_log_format_spec(), "text");
        assert_eq!(default_page_size(), 20);
        assert!(default_keyboard_shortcuts());
    }
}
