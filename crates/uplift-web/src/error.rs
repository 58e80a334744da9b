use wasm_bindgen::JsValue;

/// Failure raised while attaching an enhancement to the page.
///
/// Attachment is the only fallible setup step; once wired, every runtime
/// path degrades silently instead of erroring.
#[derive(Debug, thiserror::Error)]
#[error("{context}: {detail}")]
pub struct WireError {
    context: &'static str,
    detail: String,
}

impl WireError {
    pub fn new(context: &'static str, value: JsValue) -> Self {
        Self {
            context,
            detail: format!("{value:?}"),
        }
    }
}
