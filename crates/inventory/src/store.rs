//! The authoritative, ordered collection of items.

use chrono::{DateTime, TimeZone, Utc};

use homestock_core::ItemId;

use crate::category::Category;
use crate::item::{InventoryItem, ItemDraft, ValidDraft};

/// In-memory item collection. Insertion order is display order.
///
/// Mutations take a [`ValidDraft`], so every item in the store satisfies the field rules.
/// `update` and `remove` on an unknown id return `None` and leave the collection as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryStore {
    items: Vec<InventoryItem>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding three example belongings with fixed historical timestamps.
    pub fn with_sample_items() -> Self {
        let samples = [
            (
                ItemDraft::new("Wireless Headphones", 2, Category::Electronics, "Bedroom Desk")
                    .with_description("Sony WH-1000XM4 noise-canceling headphones"),
                sample_date(2024, 1, 15),
                sample_date(2024, 1, 15),
            ),
            (
                ItemDraft::new("Coffee Beans", 5, Category::Food, "Kitchen Cabinet")
                    .with_description("Ethiopian single origin coffee beans, 250g bags"),
                sample_date(2024, 1, 10),
                sample_date(2024, 1, 20),
            ),
            (
                ItemDraft::new("Winter Jacket", 1, Category::Clothing, "Hall Closet")
                    .with_description("Black down jacket, size M"),
                sample_date(2024, 1, 5),
                sample_date(2024, 1, 5),
            ),
        ];

        let mut store = Self::new();
        for (draft, created_at, updated_at) in samples {
            if let Ok(valid) = draft.validate() {
                let id = store.fresh_id();
                store
                    .items
                    .push(InventoryItem::from_parts(id, valid, created_at, updated_at));
            }
        }
        store
    }

    /// Append a new item stamped with the current time.
    pub fn add(&mut self, draft: ValidDraft) -> InventoryItem {
        self.add_at(draft, Utc::now())
    }

    /// Append a new item stamped with `at` (both `created_at` and `updated_at`).
    pub fn add_at(&mut self, draft: ValidDraft, at: DateTime<Utc>) -> InventoryItem {
        let item = InventoryItem::create(self.fresh_id(), draft, at);
        self.items.push(item.clone());
        item
    }

    /// Replace the editable fields of item `id`, refreshing `updated_at`.
    pub fn update(&mut self, id: ItemId, draft: ValidDraft) -> Option<InventoryItem> {
        self.update_at(id, draft, Utc::now())
    }

    pub fn update_at(
        &mut self,
        id: ItemId,
        draft: ValidDraft,
        at: DateTime<Utc>,
    ) -> Option<InventoryItem> {
        let item = self.items.iter_mut().find(|item| item.id_typed() == id)?;
        item.revise(draft, at);
        Some(item.clone())
    }

    /// Delete item `id`, returning it. Removing an absent id is a no-op.
    pub fn remove(&mut self, id: ItemId) -> Option<InventoryItem> {
        let position = self.position(id)?;
        Some(self.items.remove(position))
    }

    /// Current items in display order.
    pub fn list(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.id_typed() == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id_typed() == id)
    }

    fn fresh_id(&self) -> ItemId {
        let mut id = ItemId::new();
        while self.contains(id) {
            id = ItemId::new();
        }
        id
    }
}

fn sample_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}
