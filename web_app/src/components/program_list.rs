use leptos::prelude::*;

use super::program_card::ProgramCard;
use crate::state::EditorContext;

/// Cards in model order, rendered as direct children of the container. The
/// first entry here is the first data card on the page.
#[component]
pub fn ProgramList() -> impl IntoView {
    let editor = use_context::<EditorContext>().expect("EditorContext not found");
    let cards = editor.cards;

    view! {
        <For
            each=move || cards.with(|cards| cards.ids())
            key=|id| *id
            children=move |id| {
                cards
                    .with_untracked(|cards| cards.get(id).cloned())
                    .map(|card| view! { <ProgramCard card=card/> })
            }
        />
    }
}
