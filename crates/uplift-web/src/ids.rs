//! Element ids and attributes the enhancements attach to.
//!
//! These are the page's side of the contract; a page that omits one of
//! them simply does not get that enhancement.

/// Image that is loaded lazily on first viewport intersection.
pub const LAZY_IMAGE_ID: &str = "image-content";

/// Attribute on the lazy image holding the deferred source URL.
pub const DEFERRED_SRC_ATTR: &str = "data-src";

/// Contact form whose submission is taken over.
pub const CONTACT_FORM_ID: &str = "contactForm";

/// Inputs cleared after an accepted submission.
pub const NAME_INPUT_ID: &str = "nome";
pub const EMAIL_INPUT_ID: &str = "email";

/// Container the toast elements are appended to.
pub const TOAST_CONTAINER_ID: &str = "toastContainer";
