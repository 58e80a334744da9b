//! Asynchronous submission wiring for the contact form.
//!
//! Intercepts the native submit, POSTs the declared fields to the form's
//! configured action, and announces the outcome with a toast. The form
//! forwards whatever fields it declares; no payload schema is imposed
//! here.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use uplift_core::form::{InFlightGuard, SubmitOutcome};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, FormData, HtmlFormElement};

use crate::dom;
use crate::error::WireError;
use crate::ids::{CONTACT_FORM_ID, EMAIL_INPUT_ID, NAME_INPUT_ID};
use crate::toast;

thread_local! {
    // Keeps the submit handler alive for the page's lifetime.
    static SUBMIT_HANDLER: RefCell<Option<Closure<dyn FnMut(Event)>>> =
        const { RefCell::new(None) };
}

/// Takes over submission of the contact form, if the page carries one.
pub fn install(document: &Document) -> Result<(), WireError> {
    let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(());
    };

    let guard = Rc::new(InFlightGuard::new());
    let target = form.clone();
    let handler: Closure<dyn FnMut(Event)> = Closure::new(move |event: Event| {
        event.prevent_default();
        if !guard.try_begin() {
            return;
        }

        let fields = match FormData::new_with_form(&target) {
            Ok(fields) => fields,
            Err(error) => {
                log::error!("could not read contact form fields: {error:?}");
                guard.finish();
                return;
            }
        };
        let url = target.action();

        let guard = Rc::clone(&guard);
        spawn_local(async move {
            let outcome = post_fields(&url, fields).await;
            deliver(outcome);
            guard.finish();
        });
    });

    form.add_event_listener_with_callback("submit", handler.as_ref().unchecked_ref())
        .map_err(|value| WireError::new("contact form submit listener", value))?;
    SUBMIT_HANDLER.with(|slot| *slot.borrow_mut() = Some(handler));
    Ok(())
}

async fn post_fields(url: &str, fields: FormData) -> SubmitOutcome {
    let request = match Request::post(url).body(JsValue::from(fields)) {
        Ok(request) => request,
        Err(error) => {
            log::error!("could not build contact form request: {error}");
            return SubmitOutcome::Rejected;
        }
    };

    match request.send().await {
        Ok(response) if response.ok() => SubmitOutcome::Accepted,
        Ok(response) => {
            log::error!("contact form endpoint answered {}", response.status());
            SubmitOutcome::Rejected
        }
        Err(error) => {
            log::error!("contact form request failed: {error}");
            SubmitOutcome::Rejected
        }
    }
}

/// Announces the outcome and, on acceptance, resets the two known inputs.
fn deliver(outcome: SubmitOutcome) {
    toast::show(outcome.toast());

    if !outcome.clears_fields() {
        return;
    }
    let Some(document) = dom::document() else {
        return;
    };
    for id in [NAME_INPUT_ID, EMAIL_INPUT_ID] {
        if let Some(input) = dom::input_by_id(&document, id) {
            input.set_value("");
        }
    }
}
