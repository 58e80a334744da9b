//! Small DOM lookup helpers shared by the wiring modules.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

pub fn input_by_id(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
}

/// Runs `wire` once the document can be queried.
///
/// When the module is instantiated after parsing already finished the
/// callback runs immediately; otherwise it is deferred to
/// `DOMContentLoaded` so the wiring never races the elements it looks for.
pub fn on_ready(document: &Document, wire: impl FnOnce(&Document) + 'static) {
    if document.ready_state() != "loading" {
        wire(document);
        return;
    }

    let deferred = document.clone();
    let once = Closure::once(move |_event: web_sys::Event| wire(&deferred));
    if document
        .add_event_listener_with_callback("DOMContentLoaded", once.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("could not defer wiring to DOMContentLoaded");
    }
    // One-shot listener; leaking the closure keeps it alive until it fires.
    once.forget();
}
