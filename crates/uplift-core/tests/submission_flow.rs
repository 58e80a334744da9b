//! End-to-end checks for the submission pipeline: guard, outcome, toast.

use uplift_core::form::{InFlightGuard, SubmitOutcome, ACCEPTED_MESSAGE, REJECTED_MESSAGE};
use uplift_core::toast::ToastKind;

/// Drives one attempt through the guard and classifies its result, the way
/// the web adapter does around its POST.
fn attempt(guard: &InFlightGuard, ok: bool) -> Option<SubmitOutcome> {
    if !guard.try_begin() {
        return None;
    }
    let outcome = SubmitOutcome::from_ok(ok);
    guard.finish();
    Some(outcome)
}

#[test]
fn successful_attempt_yields_one_success_toast_and_clears_fields() {
    let guard = InFlightGuard::new();

    let outcome = attempt(&guard, true).expect("guard admits the first attempt");
    let toast = outcome.toast();

    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.message, ACCEPTED_MESSAGE);
    assert!(outcome.clears_fields());
}

#[test]
fn failed_attempt_yields_one_error_toast_and_keeps_fields() {
    let guard = InFlightGuard::new();

    let outcome = attempt(&guard, false).expect("guard admits the first attempt");
    let toast = outcome.toast();

    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, REJECTED_MESSAGE);
    assert!(!outcome.clears_fields());
}

#[test]
fn resubmission_while_pending_is_dropped_entirely() {
    let guard = InFlightGuard::new();

    assert!(guard.try_begin());
    // A second submit arrives before the first POST settles: no outcome,
    // so no toast and no field mutation.
    assert_eq!(attempt(&guard, true), None);

    guard.finish();
    assert_eq!(attempt(&guard, true), Some(SubmitOutcome::Accepted));
}
