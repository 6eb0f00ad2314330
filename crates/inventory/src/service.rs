//! Validate-then-mutate-then-notify entry points for a presentation layer.
//!
//! The service owns the store and an [`EventSink`]. Every successful mutation emits
//! exactly one [`InventoryEvent`] after the store has changed; rejected drafts and
//! unknown ids emit nothing.

use chrono::Utc;
use tracing::{debug, info};

use homestock_core::ItemId;
use homestock_events::EventSink;

use crate::event::InventoryEvent;
use crate::item::{InventoryItem, ItemDraft, ValidDraft};
use crate::search::SearchTerm;
use crate::stats::InventoryStats;
use crate::store::InventoryStore;
use crate::validation::ValidationErrors;
use crate::view::InventoryView;

#[derive(Debug, Clone)]
pub struct InventoryService<S> {
    store: InventoryStore,
    sink: S,
}

impl<S> InventoryService<S>
where
    S: EventSink<InventoryEvent>,
{
    pub fn new(sink: S) -> Self {
        Self::with_store(InventoryStore::new(), sink)
    }

    pub fn with_store(store: InventoryStore, sink: S) -> Self {
        Self { store, sink }
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_parts(self) -> (InventoryStore, S) {
        (self.store, self.sink)
    }

    /// Validate `draft` and, when it passes, add it as a new item.
    pub fn add(&mut self, draft: &ItemDraft) -> Result<InventoryItem, ValidationErrors> {
        let valid = draft.validate().inspect_err(log_rejection)?;
        Ok(self.add_validated(valid))
    }

    pub fn add_validated(&mut self, draft: ValidDraft) -> InventoryItem {
        let item = self.store.add(draft);
        info!(item_id = %item.id_typed(), category = %item.category(), "item added");
        self.sink.notify(&InventoryEvent::added(&item));
        item
    }

    /// Validate `draft` and, when it passes, apply it to item `id`.
    ///
    /// `Ok(None)` means the id is not (or no longer) in the collection; nothing changed.
    pub fn update(
        &mut self,
        id: ItemId,
        draft: &ItemDraft,
    ) -> Result<Option<InventoryItem>, ValidationErrors> {
        let valid = draft.validate().inspect_err(log_rejection)?;
        Ok(self.update_validated(id, valid))
    }

    pub fn update_validated(&mut self, id: ItemId, draft: ValidDraft) -> Option<InventoryItem> {
        let Some(item) = self.store.update(id, draft) else {
            debug!(item_id = %id, "update ignored: item not found");
            return None;
        };
        info!(item_id = %id, "item updated");
        self.sink.notify(&InventoryEvent::updated(&item));
        Some(item)
    }

    /// Delete item `id`. Returns the removed item, or `None` if it was already gone.
    pub fn remove(&mut self, id: ItemId) -> Option<InventoryItem> {
        let Some(item) = self.store.remove(id) else {
            debug!(item_id = %id, "remove ignored: item not found");
            return None;
        };
        info!(item_id = %id, "item deleted");
        self.sink.notify(&InventoryEvent::deleted(&item, Utc::now()));
        Some(item)
    }

    pub fn list(&self) -> &[InventoryItem] {
        self.store.list()
    }

    pub fn get(&self, id: ItemId) -> Option<&InventoryItem> {
        self.store.get(id)
    }

    pub fn stats(&self) -> InventoryStats {
        InventoryStats::compute(self.store.list())
    }

    /// Filtered rows plus collection-wide statistics for `search`.
    pub fn view(&self, search: &str) -> InventoryView<'_> {
        InventoryView::build(self.store.list(), SearchTerm::new(search))
    }
}

fn log_rejection(errors: &ValidationErrors) {
    let fields: Vec<&str> = errors.fields().map(|f| f.as_str()).collect();
    debug!(?fields, "draft rejected by validation");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::validation::{Field, NAME_REQUIRED};
    use homestock_events::{Event, RecordingSink};

    type TestService = InventoryService<RecordingSink<InventoryEvent>>;

    fn service() -> TestService {
        InventoryService::new(RecordingSink::new())
    }

    fn drill() -> ItemDraft {
        ItemDraft::new("Drill", 2, Category::Tools, "Garage")
    }

    #[test]
    fn add_notifies_with_item_name() {
        let mut svc = service();
        let item = svc.add(&drill()).unwrap();

        let events = svc.sink().events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "inventory.item.added");
        assert_eq!(events[0].item_id(), item.id_typed());
        assert_eq!(
            events[0].notification().description,
            "Drill has been added to your inventory."
        );
    }

    #[test]
    fn invalid_draft_is_not_added() {
        let mut svc = service();
        let draft = ItemDraft::new("", 1, Category::Food, "Shelf");

        let errors = svc.add(&draft).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert!(svc.list().is_empty());
        assert!(svc.sink().is_empty());
    }

    #[test]
    fn invalid_update_leaves_item_unchanged() {
        let mut svc = service();
        let item = svc.add(&drill()).unwrap();
        svc.sink_mut().drain();

        let bad = ItemDraft {
            quantity: 0,
            ..drill()
        };
        let errors = svc.update(item.id_typed(), &bad).unwrap_err();

        assert!(errors.contains(Field::Quantity));
        assert_eq!(svc.get(item.id_typed()), Some(&item));
        assert!(svc.sink().is_empty());
    }

    #[test]
    fn update_notifies_with_new_name() {
        let mut svc = service();
        let item = svc.add(&drill()).unwrap();
        svc.sink_mut().drain();

        let renamed = ItemDraft {
            name: "Hammer Drill".to_string(),
            ..drill()
        };
        let updated = svc.update(item.id_typed(), &renamed).unwrap().unwrap();

        assert_eq!(updated.name(), "Hammer Drill");
        assert!(updated.updated_at() >= item.updated_at());
        let note = svc.sink().events()[0].notification();
        assert_eq!(note.title, "Item Updated");
        assert_eq!(note.description, "Hammer Drill has been updated successfully.");
    }

    #[test]
    fn not_found_operations_are_silent() {
        let mut svc = service();
        let item = svc.add(&drill()).unwrap();
        assert!(svc.remove(item.id_typed()).is_some());
        svc.sink_mut().drain();

        assert_eq!(svc.update(item.id_typed(), &drill()), Ok(None));
        assert_eq!(svc.remove(item.id_typed()), None);
        assert!(svc.sink().is_empty());
        assert!(svc.list().is_empty());
    }

    #[test]
    fn remove_notifies_with_removed_name() {
        let mut svc = InventoryService::with_store(
            InventoryStore::with_sample_items(),
            RecordingSink::new(),
        );
        let jacket = svc.list()[2].id_typed();

        let removed = svc.remove(jacket).unwrap();

        assert_eq!(removed.name(), "Winter Jacket");
        assert_eq!(svc.list().len(), 2);
        let events = svc.sink().events();
        assert_eq!(events[0].event_type(), "inventory.item.deleted");
        assert_eq!(events[0].item_name(), "Winter Jacket");
    }

    #[test]
    fn view_filters_rows_but_not_stats() {
        let svc = InventoryService::with_store(
            InventoryStore::with_sample_items(),
            RecordingSink::new(),
        );
        let view = svc.view("desk");
        assert_eq!(view.shown(), 1);
        assert_eq!(view.items[0].name(), "Wireless Headphones");
        assert_eq!(view.stats, svc.stats());
    }
}
