//! Ordered model of the cards shown in the editor.
//!
//! The rendered list mirrors this model one-to-one: index 0 is the first
//! data card in the container. Nothing here is persisted; the page form
//! submission is the only way edits reach the server.

use crate::programs::{Program, ProgramCollection, ProgramField};

/// Identifies a card for the lifetime of one page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub key: String,
    pub program: Program,
    /// Detail section is open.
    pub expanded: bool,
}

impl Card {
    pub fn field(&self, field: ProgramField) -> &str {
        match field {
            ProgramField::Key => &self.key,
            other => self.program.field(other),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardList {
    cards: Vec<Card>,
    next_id: u64,
}

impl CardList {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> CardId {
        let id = CardId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append one collapsed card per program, in collection order.
    /// Returns the number of cards added.
    pub fn append_collection(&mut self, programs: &ProgramCollection) -> usize {
        for (key, program) in programs.iter() {
            let id = self.allocate_id();
            self.cards.push(Card {
                id,
                key: key.clone(),
                program: program.clone(),
                expanded: false,
            });
        }
        programs.len()
    }

    /// Insert an empty, expanded card in front of every existing card.
    pub fn insert_blank_first(&mut self) -> CardId {
        let id = self.allocate_id();
        self.cards.insert(
            0,
            Card {
                id,
                key: String::new(),
                program: Program::default(),
                expanded: true,
            },
        );
        id
    }

    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id == id)?;
        Some(self.cards.remove(index))
    }

    /// Flip the expanded flag, returning the new state.
    pub fn toggle_expanded(&mut self, id: CardId) -> Option<bool> {
        let card = self.get_mut(id)?;
        card.expanded = !card.expanded;
        Some(card.expanded)
    }

    /// Record an edit typed into one of a card's fields.
    pub fn set_field(&mut self, id: CardId, field: ProgramField, value: String) -> bool {
        let Some(card) = self.get_mut(id) else {
            return false;
        };
        match field {
            ProgramField::Key => {
                card.key = value;
                true
            }
            other => card.program.set_field(other, value),
        }
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == id)
    }

    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Name/value pairs in the order a browser submits the page form.
    pub fn form_pairs(&self) -> Vec<(&'static str, &str)> {
        self.cards
            .iter()
            .flat_map(|card| {
                ProgramField::FORM_ORDER
                    .into_iter()
                    .map(move |field| (field.form_name(), card.field(field)))
            })
            .collect()
    }
}
