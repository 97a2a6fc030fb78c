//! Notification payloads shared by the notifier, the store, and the host component.

use std::fmt;

/// Monotonic notification identifier, unique for the lifetime of the page.
pub type ToastId = u64;

/// Severity classification controlling notification styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Neutral informational notification.
    #[default]
    Info,
    /// Positive outcome.
    Success,
    /// Non-fatal condition the user should notice.
    Warning,
    /// Failure.
    Danger,
}

impl Severity {
    /// Stable token used in class names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    /// Full class list for a notification banner of this severity.
    #[must_use]
    pub fn banner_class(self) -> String {
        format!(
            "alert alert-{} custom-notification position-fixed",
            self.as_str()
        )
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle phase of a mounted notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    /// Entrance animation played; waiting for close or auto-dismiss.
    Visible,
    /// Exit animation running; detaches once it completes.
    Leaving,
}

/// Notification payload held by the region store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Page-unique identifier.
    pub id: ToastId,
    /// Display message.
    pub message: String,
    /// Severity classification.
    pub severity: Severity,
    /// Current lifecycle phase.
    pub phase: ToastPhase,
}

impl Toast {
    /// Build a freshly mounted notification.
    #[must_use]
    pub fn new(id: ToastId, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            id,
            message: message.into(),
            severity,
            phase: ToastPhase::Visible,
        }
    }

    /// Inline style pinning the banner to the top-right corner with the phase animation.
    #[must_use]
    pub fn inline_style(&self) -> String {
        let animation = match self.phase {
            ToastPhase::Visible => "slideIn 0.3s ease-out",
            ToastPhase::Leaving => "slideOut 0.3s ease-in",
        };
        format!(
            "top: 20px; right: 20px; z-index: 9999; min-width: 250px; animation: {animation};"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_defaults_to_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn banner_class_carries_severity_token() {
        assert_eq!(
            Severity::Danger.banner_class(),
            "alert alert-danger custom-notification position-fixed"
        );
        for severity in [
            Severity::Info,
            Severity::Success,
            Severity::Warning,
            Severity::Danger,
        ] {
            assert!(
                severity
                    .banner_class()
                    .contains(&format!("alert-{severity}"))
            );
        }
    }

    #[test]
    fn inline_style_tracks_phase() {
        let mut toast = Toast::new(1, "hello", Severity::Success);
        assert!(toast.inline_style().contains("slideIn 0.3s ease-out"));
        toast.phase = ToastPhase::Leaving;
        let style = toast.inline_style();
        assert!(style.contains("slideOut 0.3s ease-in"));
        assert!(style.starts_with("top: 20px; right: 20px;"));
    }
}
