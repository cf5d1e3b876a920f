//! ListView - the derived rendering model
//!
//! A snapshot handed to UIs. It is recomputed from the list and the
//! editing state on every render; nothing is ever read back out of it.

use grocery_core::GroceryItem;

/// What a UI needs in order to draw the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListView {
    /// Items in display order.
    pub items: Vec<GroceryItem>,

    /// Whether the list container is shown. Hidden exactly when the
    /// list is empty.
    pub container_visible: bool,

    /// Current content of the input field (prefilled while editing).
    pub input: String,

    /// Label of the submit action: "Add" normally, "edit" while an
    /// edit is in progress.
    pub submit_label: &'static str,
}
