//! Edit states - Defines the possible states of the editing lifecycle

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Defines the possible states of the editing lifecycle.
///
/// At most one edit is in progress at a time; the target travels with
/// the state rather than living in a separate flag-and-id pair.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EditState {
    /// No edit in progress; a submit will add a new item.
    Idle,

    /// An item is being edited; a submit will rewrite its value.
    Editing {
        /// ID of the item whose value is being rewritten.
        target_id: Uuid,
    },
}

impl Default for EditState {
    fn default() -> Self {
        EditState::Idle
    }
}

impl EditState {
    /// Check if an edit is in progress.
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// The item targeted by the current edit, if any.
    pub fn target(&self) -> Option<Uuid> {
        match self {
            Self::Editing { target_id } => Some(*target_id),
            Self::Idle => None,
        }
    }

    /// Label for the submit action in this state.
    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Idle => "Add",
            Self::Editing { .. } => "edit",
        }
    }
}
