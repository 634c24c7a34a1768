//! Localization key conventions
//!
//! Field aliases recognized by [`translate`](super::translate), the key
//! templates used by the templated lookups, and the derived-key rules that
//! build keys from a record's id.

use serde_json::Value;

/// Output field a localization-key alias resolves into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslatableField {
    Name,
    Type,
    Description,
}

impl TranslatableField {
    pub const ALL: [TranslatableField; 3] = [
        TranslatableField::Name,
        TranslatableField::Type,
        TranslatableField::Description,
    ];

    /// Name of the field written to the translated record
    pub fn target(&self) -> &'static str {
        match self {
            TranslatableField::Name => "name",
            TranslatableField::Type => "type",
            TranslatableField::Description => "description",
        }
    }

    /// Every accepted spelling, snake_case first then camelCase
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            TranslatableField::Name => NAME_ALIASES,
            TranslatableField::Type => TYPE_NAME_ALIASES,
            TranslatableField::Description => DESCRIPTION_ALIASES,
        }
    }

    /// Category of a record field name, if it is a recognized alias
    pub fn from_alias(field: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.aliases().contains(&field))
    }
}

// Source records arrive in both casings depending on where they were exported from.
pub const NAME_ALIASES: &[&str] = &[
    "tid_name",
    "chest_name_key",
    "name_key",
    "island_title_tid",
    "tidName",
    "chestNameKey",
    "nameKey",
    "islandTitleTid",
];

pub const TYPE_NAME_ALIASES: &[&str] = &["type_name_key", "typeNameKey"];

pub const DESCRIPTION_ALIASES: &[&str] = &[
    "description_key",
    "tid_description",
    "descriptionKey",
    "tidDescription",
];

/// Fixed key patterns with one interpolated id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTemplate {
    UnitName,
    UnitDescription,
    AttackName,
    SkillName,
    SkillDescription,
}

impl KeyTemplate {
    pub fn key(&self, id: u64) -> String {
        match self {
            KeyTemplate::UnitName => format!("tid_unit_{}_name", id),
            KeyTemplate::UnitDescription => format!("tid_unit_{}_description", id),
            KeyTemplate::AttackName => format!("tid_attack_name_{}", id),
            KeyTemplate::SkillName => format!("tid_skill_name_{}", id),
            KeyTemplate::SkillDescription => format!("tid_skill_description_{}", id),
        }
    }
}

/// Builds a key from a record's id when a discriminator field has a given value
#[derive(Debug, Clone, Copy)]
pub struct DerivedKeyRule {
    pub when_field: &'static str,
    pub equals: &'static str,
    pub id_field: &'static str,
    pub template: KeyTemplate,
    pub target: TranslatableField,
}

impl DerivedKeyRule {
    /// Key this rule derives for `record`, or `None` if the rule does not apply
    pub fn key_for(&self, record: &serde_json::Map<String, Value>) -> Option<String> {
        let discriminator = record.get(self.when_field)?.as_str()?;
        if discriminator != self.equals {
            return None;
        }

        let id = match record.get(self.id_field)? {
            Value::Number(n) => n.as_u64()?,
            Value::String(s) => s.trim().parse().ok()?,
            _ => return None,
        };

        Some(self.template.key(id))
    }
}

pub const DERIVED_KEY_RULES: &[DerivedKeyRule] = &[
    DerivedKeyRule {
        when_field: "group_type",
        equals: "DRAGON",
        id_field: "id",
        template: KeyTemplate::UnitName,
        target: TranslatableField::Name,
    },
    DerivedKeyRule {
        when_field: "group_type",
        equals: "DRAGON",
        id_field: "id",
        template: KeyTemplate::UnitDescription,
        target: TranslatableField::Description,
    },
];
