//! Viewport-intersection wiring for the deferred image.
//!
//! The decision of *when* to load lives in [`uplift_core::lazy`]; this
//! module only translates observer entries into that machine and applies
//! the action it hands back.

use std::cell::RefCell;

use uplift_core::lazy::{DeferredImage, LOADED_CLASS};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry};

use crate::error::WireError;
use crate::ids::{DEFERRED_SRC_ATTR, LAZY_IMAGE_ID};

thread_local! {
    // Keeps the observer callback alive for the page's lifetime.
    static OBSERVER_CALLBACK: RefCell<Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>> =
        const { RefCell::new(None) };
}

/// Starts observing the deferred image, if the page carries one.
///
/// A page without the image is a valid, silent outcome.
pub fn install(document: &Document) -> Result<(), WireError> {
    let Some(image) = document
        .get_element_by_id(LAZY_IMAGE_ID)
        .and_then(|element| element.dyn_into::<HtmlImageElement>().ok())
    else {
        return Ok(());
    };

    let mut pending = DeferredImage::new(image.get_attribute(DEFERRED_SRC_ATTR));
    let target = image.clone();
    let callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)> =
        Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let Some(action) = pending.on_intersection(entry.is_intersecting()) else {
                    continue;
                };
                if let Some(source) = action.source {
                    target.set_src(&source);
                }
                let _ = target.class_list().add_1(LOADED_CLASS);
                // One-shot: the element is never re-evaluated.
                observer.unobserve(&target);
            }
        });

    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|value| WireError::new("intersection observer", value))?;
    observer.observe(&image);
    OBSERVER_CALLBACK.with(|slot| *slot.borrow_mut() = Some(callback));
    Ok(())
}
