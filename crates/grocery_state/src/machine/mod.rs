//! State machine module
//!
//! Contains the FSM implementation for the editing lifecycle.

mod events;
mod states;
mod transitions;

pub use events::EditEvent;
pub use states::EditState;
pub use transitions::{EditStateMachine, StateTransition};
