//! grocery_core - Core types for the grocery list system
//!
//! This crate provides the foundational types used across all list-related crates:
//! - `item` - GroceryItem, a single list entry
//! - `list` - GroceryList, the ordered authoritative model

pub mod item;
pub mod list;

// Re-export commonly used types
pub use item::GroceryItem;
pub use list::GroceryList;
