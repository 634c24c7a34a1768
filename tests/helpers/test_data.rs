//! Sample translation documents

use dc_localization::i18n::{LocalizationArrayData, LocalizationData};
use dc_localization::{Language, Localization};
use serde_json::{json, Value};

/// Wire-shaped English document, as served by the translation host
pub fn english_document() -> Value {
    json!([
        { "tid_unit_1000_name": "Fire Dragon" },
        { "tid_unit_1000_description": "Born in the heart of a volcano." },
        { "tid_unit_1001_name": "Terra Dragon" },
        { "tid_attack_name_10": "Fireball" },
        { "tid_skill_name_5": "Burning Soul" },
        { "tid_skill_description_5": "Deals damage over time." },
        { "tid_type_fire": "Fire" },
        { "tid_chest_epic": "Epic Chest" },
        { "tid_island_lava": "Lava Island" }
    ])
}

/// Spanish document with accented values
pub fn spanish_document() -> Value {
    json!([
        { "tid_unit_1000_name": "Dragón de Fuego" },
        { "tid_unit_1001_name": "Dragón Tierra" },
        { "tid_type_fire": "Fuego" },
        { "tid_skill_name_5": "Alma Ardiente" }
    ])
}

pub fn document_array(document: &Value) -> LocalizationArrayData {
    serde_json::from_value(document.clone()).expect("sample document must be valid")
}

pub fn english_table() -> Localization {
    Localization::from_array(Language::En, document_array(&english_document()))
}

pub fn spanish_table() -> Localization {
    Localization::from_array(Language::Es, document_array(&spanish_document()))
}

pub fn table_from_pairs(language: Language, pairs: &[(&str, &str)]) -> Localization {
    let data: LocalizationData = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Localization::new(language, data)
}
