//! GroceryList - Container for GroceryItems
//!
//! The ordered, authoritative in-memory model. Every view of the list
//! (UI, persisted file) is derived from this; nothing is read back out
//! of a rendering.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::item::GroceryItem;

/// Ordered container for grocery items; insertion order is display order
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct GroceryList {
    items: Vec<GroceryItem>,
}

impl GroceryList {
    /// Create a new empty GroceryList
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a list from items already in display order
    pub fn from_items(items: Vec<GroceryItem>) -> Self {
        Self { items }
    }

    /// Append an item to the end of the list
    pub fn push(&mut self, item: GroceryItem) {
        self.items.push(item);
    }

    /// Get item by ID
    pub fn get(&self, id: Uuid) -> Option<&GroceryItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Get mutable item by ID
    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut GroceryItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    /// Check whether an item with this id exists
    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    /// Replace the value of the item with this id, in place.
    /// Returns false when no such item exists.
    pub fn set_value(&mut self, id: Uuid, value: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.set_value(value);
                true
            }
            None => false,
        }
    }

    /// Remove the item with this id, keeping the order of the rest.
    /// Returns the removed item when it existed.
    pub fn remove(&mut self, id: Uuid) -> Option<GroceryItem> {
        let index = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(index))
    }

    /// Drop every item
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the list holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in display order
    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }
}
