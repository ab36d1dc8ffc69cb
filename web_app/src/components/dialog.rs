//! Modal dialogs: delete confirmation, notices and the edit-conflict countdown.

use leptos::prelude::*;
use programedit_common::MessageId;

use crate::state::{Dialog, EditorContext, NoticeKind};

#[component]
pub fn DialogHost() -> impl IntoView {
    let editor = use_context::<EditorContext>().expect("EditorContext not found");

    move || {
        editor.dialog.get().map(|dialog| {
            let body = match dialog {
                Dialog::ConfirmDelete { card, key } => {
                    let text = editor.lang.render(MessageId::DeleteBody, &[("key", key.as_str())]);
                    view! {
                        <div class="dialog dialog-warning">
                            <h2>{editor.text(MessageId::DeleteTitle)}</h2>
                            <p>{text}</p>
                            <div class="dialog-buttons">
                                <button
                                    type="button"
                                    class="dialog-cancel"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        editor.dismiss_dialog();
                                    }
                                >
                                    {editor.text(MessageId::DeleteCancel)}
                                </button>
                                <button
                                    type="button"
                                    class="dialog-confirm"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        editor.confirm_delete(card);
                                    }
                                >
                                    {editor.text(MessageId::DeleteConfirm)}
                                </button>
                            </div>
                        </div>
                    }
                    .into_any()
                }
                Dialog::Notice { kind, title, text } => {
                    let class = match kind {
                        NoticeKind::Success => "dialog dialog-success",
                        NoticeKind::Error => "dialog dialog-error",
                    };
                    view! {
                        <div class=class>
                            <h2>{title}</h2>
                            <p>{text}</p>
                            <div class="dialog-buttons">
                                <button
                                    type="button"
                                    class="dialog-confirm"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        editor.dismiss_dialog();
                                    }
                                >
                                    {editor.text(MessageId::Dismiss)}
                                </button>
                            </div>
                        </div>
                    }
                    .into_any()
                }
                // No buttons: the countdown ends in a reload
                Dialog::Conflict { title, message } => view! {
                    <div class="dialog dialog-error">
                        <h2>{title}</h2>
                        <p>{message}</p>
                    </div>
                }
                .into_any(),
            };

            view! {
                // Full-screen so nothing behind the dialog can be clicked
                <div
                    class="dialog-overlay"
                    style="position: fixed; inset: 0; z-index: 50; display: flex; align-items: center; justify-content: center; background: rgba(0, 0, 0, 0.6);"
                >
                    {body}
                </div>
            }
        })
    }
}
