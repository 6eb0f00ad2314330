//! Caller-owned editing session for one add/edit form.
//!
//! The form keeps the draft being typed and the errors from the last submit attempt.
//! Changing a field clears that field's error only; the full rule set runs again on the
//! next `submit`.

use homestock_core::{Entity, ItemId};

use crate::category::Category;
use crate::item::{InventoryItem, ItemDraft, ValidDraft};
use crate::validation::{Field, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftForm {
    draft: ItemDraft,
    errors: ValidationErrors,
    editing: Option<ItemId>,
}

impl DraftForm {
    /// Blank form for a new item (quantity starts at 1, no category picked).
    pub fn for_new() -> Self {
        Self {
            draft: ItemDraft::default(),
            errors: ValidationErrors::new(),
            editing: None,
        }
    }

    /// Form pre-filled from an existing item.
    pub fn for_edit(item: &InventoryItem) -> Self {
        Self {
            draft: item.to_draft(),
            errors: ValidationErrors::new(),
            editing: Some(*item.id()),
        }
    }

    pub fn draft(&self) -> &ItemDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// The item being edited, or `None` for an add form.
    pub fn editing(&self) -> Option<ItemId> {
        self.editing
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing.is_some() {
            "Update Item"
        } else {
            "Add Item"
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
        self.errors.clear(Field::Name);
    }

    pub fn set_quantity(&mut self, quantity: i64) {
        self.draft.quantity = quantity;
        self.errors.clear(Field::Quantity);
    }

    /// Numeric text input. The leading integer is kept (`"4 bags"` is 4); zero and text
    /// with no leading digits both become 1.
    pub fn set_quantity_text(&mut self, text: &str) {
        let quantity = leading_integer(text).filter(|&q| q != 0).unwrap_or(1);
        self.set_quantity(quantity);
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.draft.category = category;
        self.errors.clear(Field::Category);
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.draft.location = location.into();
        self.errors.clear(Field::Location);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
        self.errors.clear(Field::Description);
    }

    /// Validate the whole draft. On failure the errors are kept on the form (replacing
    /// any previous ones) and also returned.
    pub fn submit(&mut self) -> Result<ValidDraft, ValidationErrors> {
        match self.draft.validate() {
            Ok(valid) => {
                self.errors = ValidationErrors::new();
                Ok(valid)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }
}

impl Default for DraftForm {
    fn default() -> Self {
        Self::for_new()
    }
}

/// Optional whitespace and sign, then digits up to the first non-digit. Saturates
/// instead of overflowing so huge input still reaches validation.
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let magnitude = rest.as_bytes()[..digits].iter().fold(0i64, |acc, d| {
        acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}
