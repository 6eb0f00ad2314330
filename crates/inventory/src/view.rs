//! Display-ready snapshot combining the filtered list with collection statistics.

use crate::item::InventoryItem;
use crate::search::{self, SearchTerm};
use crate::stats::InventoryStats;

/// Why a view shows no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The collection itself is empty.
    NoItems,
    /// Items exist but none match the search term.
    NoMatches,
}

impl EmptyState {
    /// Heading shared by every empty state.
    pub const TITLE: &'static str = "No items found";

    pub fn hint(self) -> &'static str {
        match self {
            EmptyState::NoItems => "Start by adding your first inventory item.",
            EmptyState::NoMatches => "Try adjusting your search terms.",
        }
    }
}

/// Borrowed view over a collection for one search term. Recomputed on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryView<'a> {
    pub items: Vec<&'a InventoryItem>,
    pub stats: InventoryStats,
    pub search: SearchTerm,
}

impl<'a> InventoryView<'a> {
    pub fn build(all: &'a [InventoryItem], search: SearchTerm) -> Self {
        Self {
            items: search::filter_items(all, &search),
            stats: InventoryStats::compute(all),
            search,
        }
    }

    /// Number of rows shown (after filtering).
    pub fn shown(&self) -> usize {
        self.items.len()
    }

    /// `Some` when there is nothing to show.
    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.items.is_empty() {
            None
        } else if self.search.is_empty() {
            Some(EmptyState::NoItems)
        } else {
            Some(EmptyState::NoMatches)
        }
    }
}
