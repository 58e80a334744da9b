//! Toast notification model and timing policy.
//!
//! A toast is an ephemeral record with no identity beyond its transient
//! presence on the page. Each one owns its own two-step exit: after
//! [`VISIBLE_MS`] the `show` marker is dropped (starting whatever exit
//! transition the stylesheet defines), and [`EXIT_MS`] later the element
//! is removed entirely.

/// How long a toast stays visible before its exit transition starts.
pub const VISIBLE_MS: u64 = 3_000;

/// Grace period for the exit transition before the element is removed.
pub const EXIT_MS: u64 = 400;

/// Marker class present while a toast is visible.
pub const SHOW_CLASS: &str = "show";

/// Severity of a toast notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    /// Indicates a successful operation.
    #[default]
    Success,
    /// Indicates an error or failure.
    Error,
}

impl ToastKind {
    /// Suffix used by the kind-specific visual class.
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// An ephemeral notification shown to the user and automatically dismissed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Text content displayed to the user.
    pub message: String,
    /// Severity, determining the visual style.
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }

    /// Class list applied to a freshly created toast element.
    pub fn enter_classes(&self) -> String {
        format!("toast toast-{} {}", self.kind.as_str(), SHOW_CLASS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_kind_is_success() {
        assert_eq!(ToastKind::default(), ToastKind::Success);
    }

    #[test]
    fn test_enter_classes_carry_kind_and_show_marker() {
        assert_eq!(
            Toast::success("sent").enter_classes(),
            "toast toast-success show"
        );
        assert_eq!(
            Toast::error("failed").enter_classes(),
            "toast toast-error show"
        );
    }

    #[test]
    fn test_hide_strictly_precedes_removal() {
        // The removal delay is relative to the hide step, so the element
        // outlives its visible window by exactly the exit grace period.
        assert!(EXIT_MS > 0);
        assert_eq!(VISIBLE_MS + EXIT_MS, 3_400);
    }
}
