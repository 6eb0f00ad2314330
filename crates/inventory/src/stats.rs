//! Aggregate statistics over the full collection.

use serde::Serialize;

use crate::category::Category;
use crate::item::InventoryItem;

/// Summary metrics. Always computed from the whole collection, never a filtered view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InventoryStats {
    pub total_items: usize,
    /// Distinct categories present, sorted by name.
    pub categories: Vec<Category>,
    pub total_quantity: u64,
}

impl InventoryStats {
    pub fn compute(items: &[InventoryItem]) -> Self {
        let mut categories: Vec<Category> = items.iter().map(InventoryItem::category).collect();
        categories.sort_by_key(|c| c.as_str());
        categories.dedup();

        Self {
            total_items: items.len(),
            categories,
            total_quantity: items.iter().map(|item| u64::from(item.quantity())).sum(),
        }
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}
