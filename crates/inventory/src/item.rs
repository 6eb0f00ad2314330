use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use homestock_core::{Entity, ItemId};

use crate::category::Category;
use crate::validation::{self, ValidationErrors};

/// Candidate item fields submitted for create/update, before id and timestamps exist.
///
/// A draft may hold anything the user typed, including invalid values; it only becomes
/// usable by the store once [`ItemDraft::validate`] turns it into a [`ValidDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: i64,
    pub category: Option<Category>,
    pub location: String,
    pub description: String,
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: 1,
            category: None,
            location: String::new(),
            description: String::new(),
        }
    }
}

impl ItemDraft {
    pub fn new(
        name: impl Into<String>,
        quantity: i64,
        category: Category,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            category: Some(category),
            location: location.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Run every field rule; succeed only when no field has an error.
    pub fn validate(&self) -> Result<ValidDraft, ValidationErrors> {
        let errors = validation::validate(self);
        if !errors.is_empty() {
            return Err(errors);
        }

        match (self.category, u32::try_from(self.quantity)) {
            (Some(category), Ok(quantity)) => Ok(ValidDraft {
                name: self.name.clone(),
                quantity,
                category,
                location: self.location.clone(),
                description: self.description.clone(),
            }),
            // Only reachable for quantities above u32::MAX.
            _ => Err(ValidationErrors::single(
                validation::Field::Quantity,
                validation::QUANTITY_TOO_LARGE,
            )),
        }
    }
}

/// A draft that has passed validation. Only obtainable through [`ItemDraft::validate`],
/// so holding one proves every field rule holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    name: String,
    quantity: u32,
    category: Category,
    location: String,
    description: String,
}

impl ValidDraft {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// One tracked belonging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    id: ItemId,
    name: String,
    quantity: u32,
    category: Category,
    location: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl InventoryItem {
    pub(crate) fn create(id: ItemId, draft: ValidDraft, at: DateTime<Utc>) -> Self {
        Self::from_parts(id, draft, at, at)
    }

    pub(crate) fn from_parts(
        id: ItemId,
        draft: ValidDraft,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: draft.name,
            quantity: draft.quantity,
            category: draft.category,
            location: draft.location,
            description: draft.description,
            created_at,
            updated_at: updated_at.max(created_at),
        }
    }

    /// Replace every editable field. `id` and `created_at` are kept; `updated_at` never
    /// moves backwards even if `at` does.
    pub(crate) fn revise(&mut self, draft: ValidDraft, at: DateTime<Utc>) {
        self.name = draft.name;
        self.quantity = draft.quantity;
        self.category = draft.category;
        self.location = draft.location;
        self.description = draft.description;
        self.updated_at = self.updated_at.max(at);
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// The editable fields of this item, e.g. to pre-fill an edit form.
    pub fn to_draft(&self) -> ItemDraft {
        ItemDraft {
            name: self.name.clone(),
            quantity: i64::from(self.quantity),
            category: Some(self.category),
            location: self.location.clone(),
            description: self.description.clone(),
        }
    }

    /// Confirmation question shown before deleting this item.
    pub fn delete_prompt(&self) -> String {
        format!(
            "Are you sure you want to delete \"{}\"? This action cannot be undone.",
            self.name
        )
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
