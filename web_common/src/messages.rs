//! User-facing text, one table per language.

use serde::{Deserialize, Serialize};

use crate::programs::ProgramField;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "sv")]
    Swedish,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Match a BCP 47 tag such as `sv`, `sv-SE` or `en-GB`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next()?.trim().to_ascii_lowercase();
        match primary.as_str() {
            "sv" => Some(Language::Swedish),
            "en" => Some(Language::English),
            _ => None,
        }
    }

    pub fn text(self, id: MessageId) -> &'static str {
        match self {
            Language::Swedish => swedish(id),
            Language::English => english(id),
        }
    }

    /// Look up a template and fill in its `{name}` placeholders.
    pub fn render(self, id: MessageId, args: &[(&str, &str)]) -> String {
        let mut out = self.text(id).to_string();
        for (name, value) in args {
            out = out.replace(&format!("{{{}}}", name), value);
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageId {
    ConflictTitle,
    /// Template with `{wait}`.
    ConflictBody,
    DeleteTitle,
    /// Template with `{key}`.
    DeleteBody,
    DeleteConfirm,
    DeleteCancel,
    DeletedTitle,
    DeletedBody,
    LoadFailedTitle,
    /// Template with `{error}`.
    LoadFailedBody,
    EditButton,
    DeleteButton,
    Dismiss,
    Placeholder(ProgramField),
    Label(ProgramField),
    LabelTitle(ProgramField),
}

fn swedish(id: MessageId) -> &'static str {
    use MessageId::*;
    use ProgramField as F;
    match id {
        ConflictTitle => "Redigeringskonflikt",
        ConflictBody => "En annan person har nyligen redigerat något på sidan. För att förhindra att ni skriver över varandras ändringar är det bäst att vänta tills hen är klar. Förutsatt att inga fler redigeringar äger rum så kommer du att få tillgång till sidan om {wait}.",
        DeleteTitle => "Vill du ta bort programmet?",
        DeleteBody => "Du behöver skapa '{key}' på nytt efter att den tagits bort.",
        DeleteConfirm => "Ja, ta bort programmet från appen!",
        DeleteCancel => "Avbryt",
        DeletedTitle => "Raderad!",
        DeletedBody => "Programmet togs bort utan problem. Klicka på 'spara' för att uppdatera informationen på servern. Uppdatera (F5) denna sida om du tog bort programmet av misstag.",
        LoadFailedTitle => "Kunde inte läsa programmen",
        LoadFailedBody => "Svaret från servern gick inte att tolka: {error}",
        EditButton => "redigera",
        DeleteButton => "ta bort",
        Dismiss => "OK",
        Placeholder(F::Key) => "<program-id ifylles här>",
        Placeholder(F::Name) => "<programnamn här>",
        Placeholder(F::Category) => "<kategori här>",
        Placeholder(F::Description) => "<programbeskrivning här>",
        Placeholder(F::Rss) => "<RSS-länk här>",
        Placeholder(F::Image) => "<länk till programbild här>",
        Label(F::Key) => "Program-id:",
        Label(F::Name) => "Programnamn:",
        Label(F::Category) => "Kategori:",
        Label(F::Description) => "Programbeskrivning:",
        Label(F::Rss) => "RSS-länk:",
        Label(F::Image) => "Programbildslänk:",
        LabelTitle(F::Key) => "Kort id utan mellanslag, används i länkar",
        LabelTitle(F::Name) => "T.ex på 'stan med bettan' eller '7 myror > X elefanter?'",
        LabelTitle(F::Category) => "T.ex. samhälle, nöje & kultur, studentliv eller humor",
        LabelTitle(F::Description) => "Beskrivning av programmet på svenska eller engelska",
        LabelTitle(F::Rss) => "Ser ut som http://www.radioaf.se/program/<PROGRAM-ID>/feed/?post_type=podcasts",
        LabelTitle(F::Image) => "En enkel länk till programbilden, oftast på formatet http://www.radioaf.se/wp-content/themes/base/library/includes/timthumb.....",
    }
}

fn english(id: MessageId) -> &'static str {
    use MessageId::*;
    use ProgramField as F;
    match id {
        ConflictTitle => "Edit conflict",
        ConflictBody => "Another person recently changed something. To prevent overwriting each other's data please wait until they are done. If no additional changes are made you will gain access in {wait}.",
        DeleteTitle => "Delete this program?",
        DeleteBody => "You will have to create '{key}' again after it has been deleted.",
        DeleteConfirm => "Yes, remove the program from the app!",
        DeleteCancel => "Cancel",
        DeletedTitle => "Deleted!",
        DeletedBody => "The program was removed. Click 'save' to update the information on the server. Reload (F5) this page if you removed the program by mistake.",
        LoadFailedTitle => "Could not load programs",
        LoadFailedBody => "The server response could not be read: {error}",
        EditButton => "edit",
        DeleteButton => "delete",
        Dismiss => "OK",
        Placeholder(F::Key) => "<program id here>",
        Placeholder(F::Name) => "<program name here>",
        Placeholder(F::Category) => "<category here>",
        Placeholder(F::Description) => "<program description here>",
        Placeholder(F::Rss) => "<RSS link here>",
        Placeholder(F::Image) => "<link to program image here>",
        Label(F::Key) => "Program id:",
        Label(F::Name) => "Program name:",
        Label(F::Category) => "Category:",
        Label(F::Description) => "Description:",
        Label(F::Rss) => "RSS link:",
        Label(F::Image) => "Image link:",
        LabelTitle(F::Key) => "Short id without spaces, used in links",
        LabelTitle(F::Name) => "E.g. 'stan med bettan' or '7 myror > X elefanter?'",
        LabelTitle(F::Category) => "E.g. society, entertainment & culture, student life or humour",
        LabelTitle(F::Description) => "Description of the program in Swedish or English",
        LabelTitle(F::Rss) => "Looks like http://www.radioaf.se/program/<PROGRAM-ID>/feed/?post_type=podcasts",
        LabelTitle(F::Image) => "A plain link to the program image, usually http://www.radioaf.se/wp-content/themes/base/library/includes/timthumb.....",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(Language::from_tag("sv"), Some(Language::Swedish));
        assert_eq!(Language::from_tag("sv-SE"), Some(Language::Swedish));
        assert_eq!(Language::from_tag("EN_gb"), Some(Language::English));
        assert_eq!(Language::from_tag("de"), None);
        assert_eq!(Language::from_tag(""), None);
    }

    #[test]
    fn test_render_conflict_body() {
        let text = Language::English.render(MessageId::ConflictBody, &[("wait", "21 sec")]);
        assert!(text.ends_with("you will gain access in 21 sec."));
        assert!(!text.contains('{'));
    }

    #[test]
    fn test_render_delete_body_swedish() {
        let text = Language::Swedish.render(MessageId::DeleteBody, &[("key", "morgon")]);
        assert_eq!(text, "Du behöver skapa 'morgon' på nytt efter att den tagits bort.");
    }

    #[test]
    fn test_every_field_has_placeholder_in_both_languages() {
        for lang in [Language::Swedish, Language::English] {
            for field in ProgramField::FORM_ORDER {
                assert!(!lang.text(MessageId::Placeholder(field)).is_empty());
                assert!(lang.text(MessageId::Label(field)).ends_with(':'));
            }
        }
    }

    #[test]
    fn test_language_serde_tags() {
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::English);
        assert_eq!(serde_json::to_string(&Language::Swedish).unwrap(), "\"sv\"");
    }
}
