use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use homestock_core::ItemId;
use homestock_events::Event;

use crate::item::InventoryItem;

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub item_id: ItemId,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemUpdated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUpdated {
    pub item_id: ItemId,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemDeleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDeleted {
    pub item_id: ItemId,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    ItemAdded(ItemAdded),
    ItemUpdated(ItemUpdated),
    ItemDeleted(ItemDeleted),
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ItemAdded(_) => "inventory.item.added",
            InventoryEvent::ItemUpdated(_) => "inventory.item.updated",
            InventoryEvent::ItemDeleted(_) => "inventory.item.deleted",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::ItemAdded(e) => e.occurred_at,
            InventoryEvent::ItemUpdated(e) => e.occurred_at,
            InventoryEvent::ItemDeleted(e) => e.occurred_at,
        }
    }
}

/// User-facing text for a notification popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: &'static str,
    pub description: String,
}

impl InventoryEvent {
    pub(crate) fn added(item: &InventoryItem) -> Self {
        InventoryEvent::ItemAdded(ItemAdded {
            item_id: item.id_typed(),
            name: item.name().to_string(),
            occurred_at: item.updated_at(),
        })
    }

    pub(crate) fn updated(item: &InventoryItem) -> Self {
        InventoryEvent::ItemUpdated(ItemUpdated {
            item_id: item.id_typed(),
            name: item.name().to_string(),
            occurred_at: item.updated_at(),
        })
    }

    pub(crate) fn deleted(item: &InventoryItem, occurred_at: DateTime<Utc>) -> Self {
        InventoryEvent::ItemDeleted(ItemDeleted {
            item_id: item.id_typed(),
            name: item.name().to_string(),
            occurred_at,
        })
    }

    pub fn item_id(&self) -> ItemId {
        match self {
            InventoryEvent::ItemAdded(e) => e.item_id,
            InventoryEvent::ItemUpdated(e) => e.item_id,
            InventoryEvent::ItemDeleted(e) => e.item_id,
        }
    }

    pub fn item_name(&self) -> &str {
        match self {
            InventoryEvent::ItemAdded(e) => &e.name,
            InventoryEvent::ItemUpdated(e) => &e.name,
            InventoryEvent::ItemDeleted(e) => &e.name,
        }
    }

    pub fn notification(&self) -> Notification {
        match self {
            InventoryEvent::ItemAdded(e) => Notification {
                title: "Item Added",
                description: format!("{} has been added to your inventory.", e.name),
            },
            InventoryEvent::ItemUpdated(e) => Notification {
                title: "Item Updated",
                description: format!("{} has been updated successfully.", e.name),
            },
            InventoryEvent::ItemDeleted(e) => Notification {
                title: "Item Deleted",
                description: format!("{} has been removed from your inventory.", e.name),
            },
        }
    }
}
