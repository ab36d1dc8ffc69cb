//! One editable program card.

use leptos::prelude::*;
use programedit_common::{Card, MessageId, ProgramField};

use super::fields::{CardField, FieldLabel};
use crate::state::EditorContext;

/// Header row with the key, edit toggle and delete button, followed by the
/// collapsible detail fields.
#[component]
pub fn ProgramCard(card: Card) -> impl IntoView {
    let editor = use_context::<EditorContext>().expect("EditorContext not found");
    let id = card.id;
    let (expanded, set_expanded) = signal(card.expanded);

    let details = ProgramField::DETAILS
        .into_iter()
        .map(|field| {
            let value = card.field(field).to_string();
            view! {
                <FieldLabel field=field/>
                <CardField card=id field=field value=value/>
            }
        })
        .collect_view();

    view! {
        <div class="program">
            <div class="program-header">
                <CardField card=id field=ProgramField::Key value=card.key.clone()/>
                // Buttons sit inside the page form, so the default submit is suppressed
                <button
                    type="button"
                    class:expanded=move || expanded.get()
                    on:click=move |ev| {
                        ev.prevent_default();
                        set_expanded.update(|open| *open = !*open);
                        editor.toggle_expanded(id);
                    }
                >
                    {editor.text(MessageId::EditButton)}
                </button>
                <button
                    type="button"
                    on:click=move |ev| {
                        ev.prevent_default();
                        editor.request_delete(id);
                    }
                >
                    {editor.text(MessageId::DeleteButton)}
                </button>
            </div>
            <div class="program-container" class:expanded=move || expanded.get()>
                {details}
            </div>
        </div>
    }
}
