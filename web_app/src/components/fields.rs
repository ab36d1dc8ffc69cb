//! Form field builders used by the program cards.

use leptos::prelude::*;
use programedit_common::{CardId, MessageId, ProgramField};

use crate::state::EditorContext;

/// Label shown above a detail field, with a hint on hover.
#[component]
pub fn FieldLabel(field: ProgramField) -> impl IntoView {
    let editor = use_context::<EditorContext>().expect("EditorContext not found");

    view! {
        <label title=editor.text(MessageId::LabelTitle(field))>
            {editor.text(MessageId::Label(field))}
        </label>
    }
}

/// Input or textarea for one card field.
///
/// Every field carries the `form` attribute so it is submitted with the
/// page form even when rendered outside the form element.
#[component]
pub fn CardField(card: CardId, field: ProgramField, value: String) -> impl IntoView {
    let editor = use_context::<EditorContext>().expect("EditorContext not found");
    let placeholder = editor.text(MessageId::Placeholder(field));
    let form_id = editor.form_id();
    let on_input = move |ev: leptos::ev::Event| editor.record_edit(card, field, event_target_value(&ev));

    if field.is_multiline() {
        view! {
            <textarea
                name=field.form_name()
                placeholder=placeholder
                autocomplete="off"
                form=form_id
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type="text"
                name=field.form_name()
                placeholder=placeholder
                autocomplete="off"
                form=form_id
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    }
}
