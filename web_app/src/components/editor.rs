use leptos::prelude::*;
use leptos::task::spawn_local;
use programedit_common::{Language, MessageId, WidgetConfig, WidgetError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlIFrameElement};

use super::{DialogHost, ProgramList};
use crate::api::{self, ProgramsResponse};
use crate::state::{EditorContext, NoticeKind};
use crate::{conflict, flash};

/// Root of the widget. Wires the page controls it was handed and loads the
/// program list.
#[component]
pub fn ProgramEditor(
    config: WidgetConfig,
    lang: Language,
    add_button: HtmlElement,
    result_frame: HtmlIFrameElement,
) -> impl IntoView {
    let flash_settings = config.flash.clone();
    let editor = EditorContext::new(config, lang);
    provide_context(editor);

    wire_add_button(&add_button, editor);
    flash::watch_result_frame(result_frame, flash_settings);
    spawn_local(load_programs(editor));

    view! {
        <ProgramList/>
        <DialogHost/>
    }
}

fn wire_add_button(button: &HtmlElement, editor: EditorContext) {
    let onclick_callback = Closure::wrap(Box::new(move |e: web_sys::Event| {
        // The add button lives inside the page form
        e.prevent_default();
        editor.add_blank_card();
    }) as Box<dyn FnMut(web_sys::Event)>);
    button.set_onclick(Some(onclick_callback.as_ref().unchecked_ref()));
    onclick_callback.forget();
}

async fn load_programs(editor: EditorContext) {
    let (programs_url, access_url, fallback) = editor.config.with_value(|c| {
        (c.programs_endpoint.clone(), c.access_endpoint.clone(), c.fallback_wait_secs)
    });

    match api::fetch_programs(&programs_url).await {
        Ok(ProgramsResponse::Loaded(programs)) => editor.load(&programs),
        Ok(ProgramsResponse::Locked(body)) => {
            let wait = api::resolve_wait(&body, &access_url, fallback).await;
            conflict::start_countdown(editor, wait);
        }
        Err(err) => show_load_failure(editor, err),
    }
}

fn show_load_failure(editor: EditorContext, err: WidgetError) {
    log::error!("{}", err);
    let text = editor.lang.render(MessageId::LoadFailedBody, &[("error", err.to_string().as_str())]);
    editor.show_notice(
        NoticeKind::Error,
        editor.text(MessageId::LoadFailedTitle).to_string(),
        text,
    );
}
