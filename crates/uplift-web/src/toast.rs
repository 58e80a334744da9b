//! DOM lifecycle for transient toast notifications.

use std::time::Duration;

use gloo_timers::future::sleep;
use uplift_core::toast::{self, Toast};
use wasm_bindgen_futures::spawn_local;

use crate::dom;
use crate::ids::TOAST_CONTAINER_ID;

/// Appends a toast to the notification container and schedules its removal.
///
/// A page without the container is a silent no-op. Concurrent toasts each
/// own their hide-then-remove sequence; nothing orders them relative to
/// each other.
pub fn show(notification: Toast) {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(container) = document.get_element_by_id(TOAST_CONTAINER_ID) else {
        return;
    };

    let element = match document.create_element("div") {
        Ok(element) => element,
        Err(error) => {
            log::error!("could not create toast element: {error:?}");
            return;
        }
    };
    element.set_class_name(&notification.enter_classes());
    element.set_text_content(Some(&notification.message));
    if container.append_child(&element).is_err() {
        return;
    }

    spawn_local(async move {
        sleep(Duration::from_millis(toast::VISIBLE_MS)).await;
        // Dropping the marker starts the stylesheet's exit transition;
        // the element itself goes away once that window has passed.
        let _ = element.class_list().remove_1(toast::SHOW_CLASS);
        sleep(Duration::from_millis(toast::EXIT_MS)).await;
        element.remove();
    });
}
