//! Data types for transient toast notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// How long a dismissed toast lingers while animating out before its record
/// is dropped.
pub const LEAVE_WINDOW: Duration = Duration::from_millis(300);

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ToastSeverity {
    Success,
    Warning,
    Error,
    #[default]
    Info,
}

impl ToastSeverity {
    /// How long a toast of this severity stays visible before expiring.
    /// Errors get more reading time.
    pub fn display_duration(&self) -> Duration {
        match self {
            ToastSeverity::Error => Duration::from_millis(5000),
            _ => Duration::from_millis(3000),
        }
    }

    /// Fixed accent color used when rendering the toast.
    pub fn accent_color(&self) -> &'static str {
        match self {
            ToastSeverity::Success => "#28a745",
            ToastSeverity::Warning => "#ffc107",
            ToastSeverity::Error => "#dc3545",
            ToastSeverity::Info => "#17a2b8",
        }
    }
}

/// One transient notification message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub severity: ToastSeverity,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    /// Creates a new toast with a fresh id.
    pub fn new(message: impl Into<String>, severity: ToastSeverity) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
            created_at: Utc::now(),
        }
    }
}

/// Why a toast was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DismissReason {
    /// The user clicked the toast.
    ByUser,
    /// The severity-dependent display duration elapsed.
    Expired,
    /// A newer toast replaced it.
    Replaced,
    /// The user pressed Escape, clearing every visible toast.
    EscapeKey,
}

/// Events emitted by the toast service.
#[derive(Debug, Clone, PartialEq)]
pub enum ToastEvent {
    Shown(Toast),
    Dismissed { id: Uuid, reason: DismissReason },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_default_is_info() {
        assert_eq!(ToastSeverity::default(), ToastSeverity::Info);
    }

    #[test]
    fn error_toasts_stay_longer() {
        assert_eq!(
            ToastSeverity::Error.display_duration(),
            Duration::from_millis(5000)
        );
        for severity in [
            ToastSeverity::Success,
            ToastSeverity::Warning,
            ToastSeverity::Info,
        ] {
            assert_eq!(severity.display_duration(), Duration::from_millis(3000));
        }
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            ToastSeverity::Success.accent_color(),
            ToastSeverity::Warning.accent_color(),
            ToastSeverity::Error.accent_color(),
            ToastSeverity::Info.accent_color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn severity_serde_uses_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ToastSeverity::Warning).unwrap(),
            "\"warning\""
        );
        let parsed: ToastSeverity = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(parsed, ToastSeverity::Error);
    }

    #[test]
    fn dismiss_reason_serde() {
        assert_eq!(
            serde_json::to_string(&DismissReason::EscapeKey).unwrap(),
            "\"escape-key\""
        );
    }

    #[test]
    fn toast_new_fills_fields() {
        let toast = Toast::new("Opening Grafana...", ToastSeverity::Success);
        assert_eq!(toast.message, "Opening Grafana...");
        assert_eq!(toast.severity, ToastSeverity::Success);
    }

    #[test]
    fn toast_serde_round_trip() {
        let toast = Toast::new("Copied", ToastSeverity::Info);
        let serialized = serde_json::to_string(&toast).unwrap();
        let deserialized: Toast = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, toast);
    }
}
