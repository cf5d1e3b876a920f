//! grocery_state - Editing state machine for the grocery list
//!
//! This crate provides the state machine that replaces the loose
//! edit-flag / edit-id pair with a single owned value: either no edit
//! is in progress, or exactly one item is being edited.

pub mod machine;

// Re-export commonly used types
pub use machine::{EditEvent, EditState, EditStateMachine, StateTransition};
