//! Browser adapter wiring the Uplift enhancements to the host page.
//!
//! Compiled as a `cdylib`. The wasm-bindgen start hook attaches every
//! enhancement whose collaborator elements are present and leaves the page
//! untouched otherwise: a missing image, form, or toast container is a
//! valid page, not an error.
//!
//! The three enhancements share no state and run independently off their
//! own browser events.

pub mod contact_form;
mod dom;
mod error;
pub mod ids;
pub mod lazy_image;
pub mod toast;

use wasm_bindgen::prelude::*;

pub use error::WireError;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("uplift: attaching page enhancements");

    let Some(document) = dom::document() else {
        log::warn!("uplift: no document available, nothing to enhance");
        return;
    };

    dom::on_ready(&document, |document| {
        if let Err(error) = lazy_image::install(document) {
            log::error!("uplift: lazy image wiring failed: {error}");
        }
        if let Err(error) = contact_form::install(document) {
            log::error!("uplift: contact form wiring failed: {error}");
        }
    });
}
