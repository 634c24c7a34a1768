//! Translation table for a single language
//!
//! A [`Localization`] wraps the flattened key→string mapping of one language
//! and provides lookups, normalized search, snapshot comparison and record
//! translation. The table is never mutated after construction.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::keys::KeyTemplate;
use super::normalize::{normalize_text, NormalizeOptions};
use super::translate::translate_record;
use crate::models::{ComparisonResult, DeletedField, EditedField, EditedValues, Language, NewField};
use crate::utils::errors::{LocalizationError, Result};
use crate::utils::logging;

/// Flattened key→value mapping, in source order
pub type LocalizationData = IndexMap<String, String>;

/// Wire shape of a translation document: an array of single-entry objects
pub type LocalizationArrayData = Vec<LocalizationData>;

/// Translation table for one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Localization {
    language: Language,
    data: LocalizationData,
}

impl Localization {
    /// Create a table from an already flattened mapping
    pub fn new(language: Language, data: LocalizationData) -> Self {
        Self { language, data }
    }

    /// Create a table from wire-shaped data
    pub fn from_array(language: Language, array: LocalizationArrayData) -> Self {
        Self::new(language, flatten(array))
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over `(key, value)` pairs in table order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Get the value stored under `key`
    pub fn get_value_from_key(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Get the first key, in table order, whose value equals `value`
    pub fn get_key_from_value(&self, value: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|(_, v)| v.as_str() == value)
            .map(|(k, _)| k.as_str())
    }

    /// Look up the key produced by `template` for `id`
    pub fn get_templated(&self, template: KeyTemplate, id: u64) -> Option<&str> {
        self.get_value_from_key(&template.key(id))
    }

    pub fn get_dragon_name(&self, id: u64) -> Option<&str> {
        self.get_templated(KeyTemplate::UnitName, id)
    }

    pub fn get_dragon_description(&self, id: u64) -> Option<&str> {
        self.get_templated(KeyTemplate::UnitDescription, id)
    }

    pub fn get_attack_name(&self, id: u64) -> Option<&str> {
        self.get_templated(KeyTemplate::AttackName, id)
    }

    pub fn get_skill_name(&self, id: u64) -> Option<&str> {
        self.get_templated(KeyTemplate::SkillName, id)
    }

    pub fn get_skill_description(&self, id: u64) -> Option<&str> {
        self.get_templated(KeyTemplate::SkillDescription, id)
    }

    /// Keys whose normalized form contains the normalized `query`
    pub fn search_keys(&self, query: &str, options: &NormalizeOptions) -> Vec<&str> {
        search(self.data.keys(), query, options)
    }

    /// Values whose normalized form contains the normalized `query`
    pub fn search_values(&self, query: &str, options: &NormalizeOptions) -> Vec<&str> {
        search(self.data.values(), query, options)
    }

    pub fn to_object(&self) -> &LocalizationData {
        &self.data
    }

    /// Re-serialize the table into its wire shape
    pub fn to_array(&self) -> LocalizationArrayData {
        self.data
            .iter()
            .map(|(key, value)| {
                let mut entry = IndexMap::with_capacity(1);
                entry.insert(key.clone(), value.clone());
                entry
            })
            .collect()
    }

    /// Compare this (older) table against a newer snapshot of the same language.
    ///
    /// Can also be called as `Localization::compare(&old, &new)`.
    pub fn compare(&self, newer: &Localization) -> Result<ComparisonResult> {
        if self.language != newer.language {
            return Err(LocalizationError::LanguageMismatch {
                old: self.language,
                new: newer.language,
            });
        }

        let old_data = &self.data;
        let new_data = &newer.data;
        let mut result = ComparisonResult::default();

        for (key, new_value) in new_data {
            match old_data.get(key) {
                None => result.new_fields.push(NewField {
                    key: key.clone(),
                    value: new_value.clone(),
                }),
                Some(old_value) if old_value != new_value => result.edited_fields.push(EditedField {
                    key: key.clone(),
                    values: EditedValues {
                        old: old_value.clone(),
                        new: new_value.clone(),
                    },
                }),
                Some(_) => {}
            }
        }

        for (key, old_value) in old_data {
            if !new_data.contains_key(key) {
                result.deleted_fields.push(DeletedField {
                    key: key.clone(),
                    value: old_value.clone(),
                });
            }
        }

        logging::log_comparison(self.language, &result);
        Ok(result)
    }

    /// Replace recognized localization-key fields of `record` with their
    /// translated `name`, `type` and `description` counterparts
    pub fn translate(&self, record: &Map<String, Value>) -> Map<String, Value> {
        translate_record(record, |key| self.get_value_from_key(key))
    }

    /// Translate any serializable record; it must serialize to a JSON object
    pub fn translate_value<T: Serialize>(&self, record: &T) -> Result<Map<String, Value>> {
        match serde_json::to_value(record)? {
            Value::Object(map) => Ok(self.translate(&map)),
            other => Err(LocalizationError::InvalidInput(format!(
                "only objects can be translated, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Translate `record` and deserialize the result into the output shape `U`
    pub fn translate_as<T, U>(&self, record: &T) -> Result<U>
    where
        T: Serialize,
        U: DeserializeOwned,
    {
        let translated = self.translate_value(record)?;
        Ok(serde_json::from_value(Value::Object(translated))?)
    }
}

/// Merge single-entry objects; a repeated key keeps its first position and
/// takes the last value.
pub fn flatten(array: LocalizationArrayData) -> LocalizationData {
    let mut data = LocalizationData::with_capacity(array.len());
    for entry in array {
        data.extend(entry);
    }
    data
}

fn search<'a, I>(candidates: I, query: &str, options: &NormalizeOptions) -> Vec<&'a str>
where
    I: Iterator<Item = &'a String>,
{
    let query = normalize_text(query, options);

    candidates
        .filter(|candidate| normalize_text(candidate, options).contains(&query))
        .map(String::as_str)
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
