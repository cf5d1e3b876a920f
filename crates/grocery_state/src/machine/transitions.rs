//! State transitions - FSM transition logic
//!
//! Implements the state machine that handles event-driven state transitions.

use super::events::EditEvent;
use super::states::EditState;

/// Represents a state transition result.
#[derive(Debug, Clone)]
pub struct StateTransition {
    /// The state before the transition.
    pub from: EditState,
    /// The state after the transition.
    pub to: EditState,
    /// The event that triggered the transition.
    pub event: EditEvent,
    /// Whether the state actually changed.
    pub changed: bool,
}

/// State machine for managing editing state transitions.
#[derive(Debug, Clone, Default)]
pub struct EditStateMachine {
    /// Current state.
    current_state: EditState,
}

impl EditStateMachine {
    /// Create a new state machine in Idle state.
    pub fn new() -> Self {
        Self {
            current_state: EditState::Idle,
        }
    }

    /// Create a state machine with a specific initial state.
    pub fn with_state(state: EditState) -> Self {
        Self {
            current_state: state,
        }
    }

    /// Get the current state.
    pub fn state(&self) -> &EditState {
        &self.current_state
    }

    /// Handle an event and transition to a new state.
    pub fn handle_event(&mut self, event: EditEvent) -> StateTransition {
        let old_state = self.current_state.clone();
        let new_state = Self::compute_next_state(&old_state, &event);
        let changed = old_state != new_state;

        if changed {
            tracing::debug!(from = ?old_state, to = ?new_state, "edit state transition");
        }

        self.current_state = new_state.clone();

        StateTransition {
            from: old_state,
            to: new_state,
            event,
            changed,
        }
    }

    /// Compute the next state given current state and event.
    fn compute_next_state(state: &EditState, event: &EditEvent) -> EditState {
        use EditEvent::*;
        use EditState::*;

        match (state, event) {
            // Starting an edit while one is in progress redirects to
            // the new target; edits never stack.
            (_, EditRequested { target_id }) => Editing {
                target_id: *target_id,
            },

            // Every mutation of the list tears the edit down, whether
            // or not the deleted item was the edit target.
            (_, EditCommitted) => Idle,
            (_, ItemAdded) => Idle,
            (_, ItemDeleted { .. }) => Idle,
            (_, ListCleared) => Idle,
        }
    }

    /// Reset to Idle state.
    pub fn reset(&mut self) {
        self.current_state = EditState::Idle;
    }
}
