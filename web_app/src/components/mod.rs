mod fields;
mod program_card;
mod program_list;
mod dialog;
mod editor;

pub use program_list::ProgramList;
pub use dialog::DialogHost;
pub use editor::ProgramEditor;
