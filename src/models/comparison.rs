//! Comparison result model

use serde::{Deserialize, Serialize};

/// Key present only in the newer table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewField {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditedValues {
    pub old: String,
    pub new: String,
}

/// Key present in both tables with a different value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditedField {
    pub key: String,
    pub values: EditedValues,
}

/// Key present only in the older table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedField {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub new_fields: Vec<NewField>,
    pub edited_fields: Vec<EditedField>,
    pub deleted_fields: Vec<DeletedField>,
}

impl ComparisonResult {
    /// True when both tables hold exactly the same entries
    pub fn is_empty(&self) -> bool {
        self.new_fields.is_empty() && self.edited_fields.is_empty() && self.deleted_fields.is_empty()
    }

    pub fn total_changes(&self) -> usize {
        self.new_fields.len() + self.edited_fields.len() + self.deleted_fields.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_lists() {
        let result = ComparisonResult {
            new_fields: vec![NewField { key: "a".into(), value: "A".into() }],
            edited_fields: vec![EditedField {
                key: "b".into(),
                values: EditedValues { old: "x".into(), new: "y".into() },
            }],
            deleted_fields: vec![],
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["newFields"][0]["key"], "a");
        assert_eq!(value["editedFields"][0]["values"]["new"], "y");
        assert!(value["deletedFields"].as_array().unwrap().is_empty());
        assert_eq!(result.total_changes(), 2);
        assert!(!result.is_empty());
    }
}
