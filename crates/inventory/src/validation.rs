//! Field-level validation rules for item drafts.
//!
//! Validation never panics or aborts: it produces a field → message mapping, and an
//! empty mapping means the draft is acceptable.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::item::ItemDraft;

pub const NAME_REQUIRED: &str = "Item name is required";
pub const QUANTITY_AT_LEAST_ONE: &str = "Quantity must be at least 1";
pub const QUANTITY_TOO_LARGE: &str = "Quantity is too large";
pub const CATEGORY_REQUIRED: &str = "Category is required";
pub const LOCATION_REQUIRED: &str = "Location is required";

/// An editable item field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Quantity,
    Category,
    Location,
    Description,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Quantity => "quantity",
            Field::Category => "category",
            Field::Location => "location",
            Field::Description => "description",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation messages. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("validation failed for {} field(s)", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn single(field: Field, message: &str) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.errors.insert(field, message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Drop one field's error, leaving every other field untouched.
    /// Returns whether an error was present.
    pub fn clear(&mut self, field: Field) -> bool {
        self.errors.remove(&field).is_some()
    }

    /// Fields with errors, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// Apply every field rule to `draft`.
pub fn validate(draft: &ItemDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if draft.name.trim().is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }
    if draft.quantity < 1 {
        errors.insert(Field::Quantity, QUANTITY_AT_LEAST_ONE);
    }
    if draft.category.is_none() {
        errors.insert(Field::Category, CATEGORY_REQUIRED);
    }
    if draft.location.trim().is_empty() {
        errors.insert(Field::Location, LOCATION_REQUIRED);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    #[test]
    fn valid_draft_has_no_errors() {
        let draft = ItemDraft::new("Drill", 2, Category::Tools, "Garage");
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn empty_name_is_the_only_error() {
        let draft = ItemDraft::new("", 1, Category::Food, "Shelf");
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
    }

    #[test]
    fn whitespace_only_text_counts_as_empty() {
        let draft = ItemDraft::new("   ", 1, Category::Food, "\t");
        let errors = validate(&draft);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Name, Field::Location]);
    }

    #[test]
    fn blank_form_reports_every_required_field() {
        let draft = ItemDraft {
            quantity: 0,
            ..ItemDraft::default()
        };
        let errors = validate(&draft);
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::Quantity), Some(QUANTITY_AT_LEAST_ONE));
        assert_eq!(errors.get(Field::Category), Some(CATEGORY_REQUIRED));
        assert_eq!(errors.get(Field::Location), Some(LOCATION_REQUIRED));
        assert!(!errors.contains(Field::Description));
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let draft = ItemDraft::new("Drill", -3, Category::Tools, "Garage");
        assert_eq!(validate(&draft).get(Field::Quantity), Some(QUANTITY_AT_LEAST_ONE));
    }

    #[test]
    fn description_is_never_validated() {
        let draft = ItemDraft::new("Drill", 1, Category::Tools, "Garage").with_description("");
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn clear_only_touches_one_field() {
        let draft = ItemDraft {
            quantity: 0,
            ..ItemDraft::default()
        };
        let mut errors = validate(&draft);
        assert!(errors.clear(Field::Name));
        assert!(!errors.clear(Field::Name));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn serializes_as_plain_field_map() {
        let draft = ItemDraft::new("", 1, Category::Food, "Shelf");
        let json = serde_json::to_value(validate(&draft)).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Item name is required" }));
    }

    #[test]
    fn error_message_counts_fields() {
        let draft = ItemDraft::default();
        assert_eq!(
            validate(&draft).to_string(),
            "validation failed for 3 field(s)"
        );
    }
}
