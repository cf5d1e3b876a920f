//! List Manager service

use crate::error::{ListError, Result};
use crate::view::ListView;
use grocery_core::{GroceryItem, GroceryList};
use grocery_state::{EditEvent, EditState, EditStateMachine};
use notification::{Notifier, Severity};
use std::sync::Arc;
use storage_manager::ListStorage;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Everything the manager mutates, guarded as one unit so a
/// read-modify-write of the list never interleaves with another
/// operation.
#[derive(Debug, Default)]
struct ManagerState {
    list: GroceryList,
    machine: EditStateMachine,
    input: String,
}

/// List Manager - owns the grocery list and keeps the in-memory
/// model, the editing state, and durable storage consistent.
pub struct ListManager<S: ListStorage> {
    storage: Arc<S>,
    state: Arc<RwLock<ManagerState>>,
    notifier: Notifier,
}

impl<S: ListStorage> ListManager<S> {
    /// Create a new ListManager over the given storage backend.
    pub fn new(storage: S, notifier: Notifier) -> Self {
        Self {
            storage: Arc::new(storage),
            state: Arc::new(RwLock::new(ManagerState::default())),
            notifier,
        }
    }

    /// Load the persisted list into the model. Runs before any user
    /// interaction and never notifies.
    pub async fn initialize(&self) -> Result<()> {
        let loaded = self.storage.load().await?;
        tracing::info!(items = loaded.len(), "loaded persisted list");

        let mut state = self.state.write().await;
        state.list = loaded;
        state.machine.reset();
        state.input.clear();
        Ok(())
    }

    /// Add a new item with the given text to the end of the list.
    ///
    /// Empty text is a validation failure: a danger notice is shown
    /// and nothing changes. Any edit in progress is torn down.
    pub async fn add(&self, text: &str) -> Result<Uuid> {
        let mut state = self.state.write().await;
        self.add_locked(&mut state, text).await
    }

    async fn add_locked(&self, state: &mut ManagerState, text: &str) -> Result<Uuid> {
        if text.is_empty() {
            self.notifier.show("Please Enter A Value", Severity::Danger);
            return Err(ListError::EmptyValue);
        }

        let item = GroceryItem::new(text);
        let id = item.id;
        state.list.push(item);
        self.storage.save(&state.list).await?;

        tracing::debug!(%id, value = text, "added item");
        self.notifier
            .show("Successfully Added Item", Severity::Success);

        state.machine.handle_event(EditEvent::ItemAdded);
        state.input.clear();
        Ok(id)
    }

    /// Begin editing the item with this id: its current value is
    /// loaded into the input field and subsequent submits rewrite it.
    /// Starting another edit simply retargets; edits never stack.
    pub async fn start_edit(&self, id: Uuid) -> Result<()> {
        let mut state = self.state.write().await;

        let value = state
            .list
            .get(id)
            .ok_or(ListError::ItemNotFound(id))?
            .value
            .clone();

        state.input = value;
        state
            .machine
            .handle_event(EditEvent::EditRequested { target_id: id });
        Ok(())
    }

    /// Submit the input: adds a new item when idle, commits the
    /// in-progress edit otherwise. The dispatch and the mutation
    /// happen under one write guard so nothing interleaves between
    /// reading the editing state and acting on it.
    pub async fn submit(&self, text: &str) -> Result<()> {
        let mut state = self.state.write().await;

        match state.machine.state().target() {
            None => self.add_locked(&mut state, text).await.map(|_| ()),
            Some(target_id) => self.commit_edit_locked(&mut state, target_id, text).await,
        }
    }

    async fn commit_edit_locked(
        &self,
        state: &mut ManagerState,
        target_id: Uuid,
        text: &str,
    ) -> Result<()> {
        if text.is_empty() {
            // Same validation failure as add; the edit stays pending.
            self.notifier.show("Please Enter A Value", Severity::Danger);
            return Err(ListError::EmptyValue);
        }

        if !state.list.set_value(target_id, text) {
            // The target vanished under the edit; abandon it.
            state.machine.reset();
            state.input.clear();
            return Err(ListError::ItemNotFound(target_id));
        }
        self.storage.save(&state.list).await?;

        tracing::debug!(id = %target_id, value = text, "edited item");
        self.notifier
            .show("Successfully Edited Item", Severity::Success);

        state.machine.handle_event(EditEvent::EditCommitted);
        state.input.clear();
        Ok(())
    }

    /// Remove the item with this id from the model and from storage.
    /// Any edit in progress is torn down, whichever item it targeted.
    pub async fn delete(&self, id: Uuid) -> Result<GroceryItem> {
        let mut state = self.state.write().await;

        let removed = state.list.remove(id).ok_or(ListError::ItemNotFound(id))?;
        self.storage.save(&state.list).await?;

        tracing::debug!(%id, value = %removed.value, "removed item");
        self.notifier.show("Removed Item", Severity::Danger);

        state.machine.handle_event(EditEvent::ItemDeleted { item_id: id });
        state.input.clear();
        Ok(removed)
    }

    /// Remove every item and erase the stored list entirely. The
    /// storage key itself goes away, not just its contents.
    pub async fn clear_all(&self) -> Result<()> {
        let mut state = self.state.write().await;

        state.list.clear();
        self.storage.clear().await?;

        tracing::debug!("emptied list");
        self.notifier.show("Emptied List", Severity::Danger);

        state.machine.handle_event(EditEvent::ListCleared);
        state.input.clear();
        Ok(())
    }

    /// Snapshot of what a UI should draw right now.
    pub async fn view(&self) -> ListView {
        let state = self.state.read().await;
        ListView {
            items: state.list.items().to_vec(),
            container_visible: !state.list.is_empty(),
            input: state.input.clone(),
            submit_label: state.machine.state().submit_label(),
        }
    }

    /// Current editing state.
    pub async fn edit_state(&self) -> EditState {
        self.state.read().await.machine.state().clone()
    }

    /// The notifier this manager reports through.
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}
