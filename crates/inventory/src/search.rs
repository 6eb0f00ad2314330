//! Free-text search projection over the item collection.

use crate::item::InventoryItem;

/// A case-insensitive search term. The empty term matches every item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    needle: String,
}

impl SearchTerm {
    pub fn new(term: impl Into<String>) -> Self {
        let raw = term.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    /// The term as the user typed it.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Whether the term occurs in the item's name, location or category.
    pub fn matches(&self, item: &InventoryItem) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        [item.name(), item.location(), item.category().as_str()]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// Items matching `term`, in collection order.
pub fn filter_items<'a>(items: &'a [InventoryItem], term: &SearchTerm) -> Vec<&'a InventoryItem> {
    items.iter().filter(|item| term.matches(item)).collect()
}
