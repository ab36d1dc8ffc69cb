/// Loading a `/programs` body into the card model, the way the editor does on page load.
use programedit_common::{CardList, ProgramCollection, ProgramField};

// Keys are not in alphabetical order.
const PROGRAMS_JSON: &str = r#"{
    "morgon": {
        "name": "Morgonpasset",
        "rss": "http://www.radioaf.se/program/morgon/feed/?post_type=podcasts",
        "image": "http://www.radioaf.se/img/morgon.png",
        "description": "Väckning med musik",
        "category": "nöje & kultur"
    },
    "stan": {
        "name": "På stan med Bettan",
        "rss": "http://www.radioaf.se/program/stan/feed/?post_type=podcasts",
        "image": "",
        "description": "",
        "category": "samhälle"
    },
    "humor": {
        "name": "7 myror > X elefanter?",
        "rss": "",
        "image": "",
        "description": "",
        "category": "humor"
    }
}"#;

#[test]
fn test_one_card_per_program_in_source_order() {
    let programs = ProgramCollection::from_json(PROGRAMS_JSON).unwrap();
    let mut cards = CardList::new();
    let rendered = cards.append_collection(&programs);

    assert_eq!(rendered, 3);
    assert_eq!(cards.len(), 3);
    let keys: Vec<&str> = cards.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["morgon", "stan", "humor"]);
}

#[test]
fn test_cards_prepopulated_with_record_values() {
    let programs = ProgramCollection::from_json(PROGRAMS_JSON).unwrap();
    let mut cards = CardList::new();
    cards.append_collection(&programs);

    for card in cards.iter() {
        let record = programs.get(&card.key).unwrap();
        for field in ProgramField::DETAILS {
            assert_eq!(card.field(field), record.field(field));
        }
    }
    let morgon = cards.iter().find(|c| c.key == "morgon").unwrap();
    assert_eq!(morgon.field(ProgramField::Name), "Morgonpasset");
}

#[test]
fn test_add_then_delete_round() {
    let programs = ProgramCollection::from_json(PROGRAMS_JSON).unwrap();
    let mut cards = CardList::new();
    cards.append_collection(&programs);
    let loaded = cards.ids();

    let added = cards.insert_blank_first();
    assert_eq!(cards.ids()[0], added);
    assert_eq!(&cards.ids()[1..], &loaded[..]);

    cards.remove(loaded[1]);
    assert_eq!(cards.ids(), vec![added, loaded[0], loaded[2]]);
    let keys: Vec<&str> = cards.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["", "morgon", "humor"]);
    assert_eq!(cards.iter().nth(2).unwrap().field(ProgramField::Name), "7 myror > X elefanter?");
}

#[test]
fn test_empty_collection_renders_nothing() {
    let programs = ProgramCollection::from_json("{}").unwrap();
    let mut cards = CardList::new();
    assert_eq!(cards.append_collection(&programs), 0);
    assert!(cards.is_empty());
    assert!(cards.form_pairs().is_empty());
}
