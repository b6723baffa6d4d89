//! Validated display label for registered applications.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of an application label, in characters.
const MAX_LABEL_LEN: usize = 100;

/// A validated, human-readable display name for a registered application.
///
/// Labels appear on cards and inside notification messages
/// ("Opening {label}..."), so they must be non-empty, contain no control
/// characters, and stay within a display-friendly length.
///
/// # Examples
///
/// ```
/// # use appdeck_core::types::AppLabel;
/// # use appdeck_core::error::CoreError;
/// let label = AppLabel::new("Build Dashboard").unwrap();
/// assert_eq!(label.value(), "Build Dashboard");
///
/// assert!(matches!(AppLabel::new(""), Err(CoreError::InvalidInput(_))));
/// assert!(matches!(AppLabel::new("bad\nlabel"), Err(CoreError::InvalidInput(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppLabel(String);

impl AppLabel {
    /// Creates a new `AppLabel`.
    ///
    /// The value must be non-empty after trimming, must not contain control
    /// characters, and must not exceed 100 characters.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidInput` describing the violated rule.
    pub fn new(value: &str) -> Result<Self, CoreError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidInput(
                "Application label cannot be empty.".to_string(),
            ));
        }
        if trimmed.chars().count() > MAX_LABEL_LEN {
            return Err(CoreError::InvalidInput(format!(
                "Application label exceeds {} characters.",
                MAX_LABEL_LEN
            )));
        }
        if trimmed.chars().any(char::is_control) {
            return Err(CoreError::InvalidInput(format!(
                "Application label '{}' contains control characters.",
                trimmed.escape_default()
            )));
        }
        Ok(AppLabel(trimmed.to_string()))
    }

    /// Returns the underlying string value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<AppLabel> for String {
    fn from(label: AppLabel) -> Self {
        label.0
    }
}

impl AsRef<str> for AppLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
