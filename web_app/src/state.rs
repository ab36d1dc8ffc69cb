//! Editor state shared between components through context.

use leptos::prelude::*;
use programedit_common::{CardId, CardList, Language, MessageId, ProgramCollection, ProgramField, WidgetConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// The single dialog slot. Only one dialog is visible at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    ConfirmDelete { card: CardId, key: String },
    Notice { kind: NoticeKind, title: String, text: String },
    /// Blocking; there is no way to dismiss it besides the reload.
    Conflict { title: String, message: String },
}

#[derive(Clone, Copy)]
pub struct EditorContext {
    pub cards: RwSignal<CardList>,
    pub dialog: RwSignal<Option<Dialog>>,
    pub lang: Language,
    pub config: StoredValue<WidgetConfig>,
}

impl EditorContext {
    pub fn new(config: WidgetConfig, lang: Language) -> Self {
        Self {
            cards: RwSignal::new(CardList::new()),
            dialog: RwSignal::new(None),
            lang,
            config: StoredValue::new(config),
        }
    }

    pub fn text(&self, id: MessageId) -> &'static str {
        self.lang.text(id)
    }

    pub fn form_id(&self) -> String {
        self.config.with_value(|c| c.form_id.clone())
    }

    /// Append the fetched programs after any cards already on screen.
    pub fn load(&self, programs: &ProgramCollection) {
        let added = self
            .cards
            .try_update(|cards| cards.append_collection(programs))
            .unwrap_or(0);
        let fields = self.cards.with_untracked(|cards| cards.form_pairs().len());
        log::info!("Rendered {} program cards ({} form fields)", added, fields);
    }

    /// The conflict dialog is up; every other interaction waits for the reload.
    pub fn is_blocked(&self) -> bool {
        self.dialog
            .with_untracked(|dialog| matches!(dialog, Some(Dialog::Conflict { .. })))
    }

    pub fn add_blank_card(&self) -> Option<CardId> {
        if self.is_blocked() {
            return None;
        }
        let id = self.cards.try_update(|cards| cards.insert_blank_first());
        log::debug!("Added blank card {:?}", id);
        id
    }

    /// Mirror an edit into the model without re-rendering the list.
    pub fn record_edit(&self, card: CardId, field: ProgramField, value: String) {
        self.cards.update_untracked(|cards| {
            cards.set_field(card, field, value);
        });
    }

    pub fn toggle_expanded(&self, card: CardId) {
        self.cards.update_untracked(|cards| {
            cards.toggle_expanded(card);
        });
    }

    pub fn request_delete(&self, card: CardId) {
        if self.is_blocked() {
            return;
        }
        let key = self
            .cards
            .with_untracked(|cards| cards.get(card).map(|c| c.key.clone()))
            .unwrap_or_default();
        self.dialog.set(Some(Dialog::ConfirmDelete { card, key }));
    }

    pub fn confirm_delete(&self, card: CardId) {
        if self.is_blocked() {
            return;
        }
        match self.cards.try_update(|cards| cards.remove(card)).flatten() {
            Some(removed) => {
                log::debug!("Removed card {:?} ('{}')", card, removed.key);
                self.show_notice(
                    NoticeKind::Success,
                    self.text(MessageId::DeletedTitle).to_string(),
                    self.text(MessageId::DeletedBody).to_string(),
                );
            }
            None => self.dismiss_dialog(),
        }
    }

    pub fn show_notice(&self, kind: NoticeKind, title: String, text: String) {
        if self.is_blocked() {
            return;
        }
        self.dialog.set(Some(Dialog::Notice { kind, title, text }));
    }

    /// Show or refresh the conflict dialog for the given remaining wait.
    pub fn show_conflict(&self, wait: &str) {
        let title = self.text(MessageId::ConflictTitle).to_string();
        let message = self.lang.render(MessageId::ConflictBody, &[("wait", wait)]);
        self.dialog.set(Some(Dialog::Conflict { title, message }));
    }

    pub fn dismiss_dialog(&self) {
        if self.is_blocked() {
            return;
        }
        self.dialog.set(None);
    }
}
