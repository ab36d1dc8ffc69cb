//! Result frame flash.

use std::time::Duration;

use leptos::prelude::*;
use programedit_common::{FlashSequence, FlashSettings};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlIFrameElement};

/// Flash the result frame every time it finishes loading a submission result.
pub fn watch_result_frame(frame: HtmlIFrameElement, settings: FlashSettings) {
    let target = frame.clone();
    let onload_callback = Closure::wrap(Box::new(move |_| {
        log_result(&target);
        flash(target.clone().unchecked_into(), settings.clone());
    }) as Box<dyn FnMut(JsValue)>);
    frame.set_onload(Some(onload_callback.as_ref().unchecked_ref()));
    onload_callback.forget();
}

/// Alternate the element's background between the two flash colors.
pub fn flash(element: HtmlElement, settings: FlashSettings) {
    let sequence = settings.sequence();
    apply_step(element, settings, sequence);
}

fn apply_step(element: HtmlElement, settings: FlashSettings, mut sequence: FlashSequence) {
    let step = sequence.step();
    if let Err(e) = element.style().set_property("background", settings.color(step.color)) {
        log::warn!("Could not set flash color: {:?}", e);
    }
    if step.schedule_next {
        let interval = Duration::from_millis(settings.interval_ms as u64);
        set_timeout(move || apply_step(element, settings, sequence), interval);
    }
}

fn log_result(frame: &HtmlIFrameElement) {
    let text = frame
        .content_document()
        .and_then(|doc| doc.body())
        .and_then(|body| body.text_content());
    match text {
        Some(text) if !text.trim().is_empty() => log::info!("Submission result: {}", text.trim()),
        _ => log::debug!("Result frame loaded"),
    }
}
