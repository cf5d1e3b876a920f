//! Edit events - Defines events that trigger state transitions

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Defines the events that can trigger state transitions in the FSM.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditEvent {
    /// User asked to edit an existing item.
    EditRequested { target_id: Uuid },

    /// The in-progress edit was committed.
    EditCommitted,

    /// A new item was added (defensive reset of any stale edit).
    ItemAdded,

    /// An item was deleted.
    ItemDeleted { item_id: Uuid },

    /// The whole list was cleared.
    ListCleared,
}

impl EditEvent {
    /// Check if this event tears down any in-progress edit.
    pub fn is_reset(&self) -> bool {
        matches!(
            self,
            Self::EditCommitted | Self::ItemAdded | Self::ItemDeleted { .. } | Self::ListCleared
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_event_detection() {
        assert!(EditEvent::ListCleared.is_reset());
        assert!(EditEvent::ItemAdded.is_reset());
        let event = EditEvent::EditRequested {
            target_id: Uuid::new_v4(),
        };
        assert!(!event.is_reset());
    }
}
