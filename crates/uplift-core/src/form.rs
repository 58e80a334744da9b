//! Submission outcome classification and reentrancy guard for the
//! contact form.
//!
//! The wire layer reports only whether the exchange ended with an ok
//! status; everything else (non-ok status, transport failure, a request
//! that could not even be built) collapses into the same rejected outcome
//! with the same cause-agnostic message.

use std::cell::Cell;

use crate::toast::Toast;

/// User-visible message for an accepted submission.
pub const ACCEPTED_MESSAGE: &str = "Form submitted successfully!";

/// User-visible message for a rejected submission.
pub const REJECTED_MESSAGE: &str = "Something went wrong while sending. Please try again.";

/// Result of one submission attempt, as the user sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The endpoint answered with an ok status.
    Accepted,
    /// Non-ok status or the call itself failed.
    Rejected,
}

impl SubmitOutcome {
    /// Classifies a completed HTTP exchange by its ok status.
    pub fn from_ok(ok: bool) -> Self {
        if ok {
            SubmitOutcome::Accepted
        } else {
            SubmitOutcome::Rejected
        }
    }

    /// Toast announcing this outcome. Exactly one per attempt.
    pub fn toast(self) -> Toast {
        match self {
            SubmitOutcome::Accepted => Toast::success(ACCEPTED_MESSAGE),
            SubmitOutcome::Rejected => Toast::error(REJECTED_MESSAGE),
        }
    }

    /// Whether the form fields should be reset after this outcome.
    pub fn clears_fields(self) -> bool {
        self == SubmitOutcome::Accepted
    }
}

/// Reentrancy guard for the asynchronous submission path.
///
/// The browser happily delivers another `submit` while the previous POST
/// is still pending; admitting it would spawn a second unsynchronized
/// request chain and a second toast. The guard admits one attempt at a
/// time and reopens once that attempt finishes, success or failure.
#[derive(Debug, Default)]
pub struct InFlightGuard {
    in_flight: Cell<bool>,
}

impl InFlightGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tries to claim the guard. Returns `false` while an earlier
    /// submission is still pending.
    pub fn try_begin(&self) -> bool {
        if self.in_flight.get() {
            log::debug!("submission ignored, another one is in flight");
            return false;
        }
        self.in_flight.set(true);
        true
    }

    /// Releases the guard after the pending submission settled.
    pub fn finish(&self) {
        self.in_flight.set(false);
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastKind;

    #[test]
    fn test_ok_status_is_accepted() {
        assert_eq!(SubmitOutcome::from_ok(true), SubmitOutcome::Accepted);
        assert_eq!(SubmitOutcome::from_ok(false), SubmitOutcome::Rejected);
    }

    #[test]
    fn test_accepted_toast_and_field_reset() {
        let outcome = SubmitOutcome::Accepted;
        let toast = outcome.toast();

        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, ACCEPTED_MESSAGE);
        assert!(outcome.clears_fields());
    }

    #[test]
    fn test_rejected_toast_leaves_fields_alone() {
        let outcome = SubmitOutcome::Rejected;
        let toast = outcome.toast();

        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, REJECTED_MESSAGE);
        assert!(!outcome.clears_fields());
    }

    #[test]
    fn test_guard_admits_one_attempt_at_a_time() {
        let guard = InFlightGuard::new();

        assert!(guard.try_begin());
        assert!(!guard.try_begin());
        guard.finish();
        assert!(guard.try_begin());
    }
}
