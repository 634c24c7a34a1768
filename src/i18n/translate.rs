//! Record translation
//!
//! Rewrites localization-key fields of an ordered JSON record into the
//! human-readable `name`, `type` and `description` fields.

use serde_json::{Map, Value};
use tracing::trace;

use super::keys::{TranslatableField, DERIVED_KEY_RULES};

/// Translate `record` using `resolve` to look keys up.
///
/// Alias fields are visited in the record's order. A resolved alias sets its
/// target field (in place if it already exists, appended otherwise) and is
/// removed without disturbing the order of the other fields. Unresolved
/// aliases and non-alias fields are copied unchanged.
pub fn translate_record<'a, F>(record: &Map<String, Value>, resolve: F) -> Map<String, Value>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut translated = record.clone();
    let mut produced: Vec<TranslatableField> = Vec::new();

    for (field, value) in record {
        let Some(category) = TranslatableField::from_alias(field) else {
            continue;
        };
        let Some(key) = value.as_str() else {
            continue;
        };

        match resolve(key) {
            Some(resolved) => {
                translated.insert(category.target().to_string(), Value::String(resolved.to_string()));
                translated.shift_remove(field);
                produced.push(category);
            }
            None => trace!(field = %field, key = key, "Localization key not found, field kept"),
        }
    }

    for rule in DERIVED_KEY_RULES {
        if produced.contains(&rule.target) {
            continue;
        }
        let Some(key) = rule.key_for(record) else {
            continue;
        };

        if let Some(resolved) = resolve(key.as_str()) {
            translated.insert(rule.target.target().to_string(), Value::String(resolved.to_string()));
            produced.push(rule.target);
        }
    }

    translated
}
