//! Host-independent logic for the Uplift page enhancements.
//!
//! Everything here is plain state: the one-shot lazy-image machine, the
//! contact form outcome classification, and the toast model with its timing
//! policy. Nothing in this crate touches the browser; the `uplift-web`
//! adapter owns all DOM and network plumbing.

pub mod form;
pub mod lazy;
pub mod toast;

pub use form::{InFlightGuard, SubmitOutcome};
pub use lazy::{DeferredImage, LoadAction, LoadState};
pub use toast::{Toast, ToastKind};
