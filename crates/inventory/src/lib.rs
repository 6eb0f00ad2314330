//! Personal inventory domain module.
//!
//! Holds the in-memory item collection and everything derived from it: validation of
//! submitted drafts, the search projection and the aggregate statistics. Pure domain
//! logic (no IO, no rendering); callers own session state such as the current search
//! term or the form being edited.

pub mod category;
pub mod event;
pub mod form;
pub mod item;
pub mod search;
pub mod service;
pub mod stats;
pub mod store;
pub mod validation;
pub mod view;

pub use category::{BadgeColor, Category};
pub use event::{InventoryEvent, ItemAdded, ItemDeleted, ItemUpdated, Notification};
pub use form::DraftForm;
pub use item::{InventoryItem, ItemDraft, ValidDraft};
pub use search::{SearchTerm, filter_items};
pub use service::InventoryService;
pub use stats::InventoryStats;
pub use store::InventoryStore;
pub use validation::{Field, ValidationErrors, validate};
pub use view::{EmptyState, InventoryView};

pub use homestock_core::ItemId;
