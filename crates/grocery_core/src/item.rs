//! GroceryItem - a single list entry
//!
//! An item is an id plus its text. The id is a random v4 uuid rather
//! than a creation timestamp, so two items created within the same
//! clock tick can never collide.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One entry in the grocery list
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GroceryItem {
    /// Unique identifier
    pub id: Uuid,

    /// Text of the entry, never empty
    pub value: String,
}

impl GroceryItem {
    /// Create a new item with a fresh id
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            value: value.into(),
        }
    }

    /// Replace the text in place, keeping the id
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}
