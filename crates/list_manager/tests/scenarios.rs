//! End-to-end scenarios exercising the public API the way a UI would.

use grocery_state::EditState;
use list_manager::{ListError, ListManager};
use notification::Notifier;
use storage_manager::{FileListStorage, ListStorage};
use tempfile::tempdir;

async fn fresh_manager(dir: &tempfile::TempDir) -> ListManager<FileListStorage> {
    let storage = FileListStorage::new(dir.path().join("list.json"));
    let manager = ListManager::new(storage, Notifier::new());
    manager.initialize().await.unwrap();
    manager
}

#[tokio::test]
async fn add_then_edit_then_delete_lifecycle() {
    let dir = tempdir().unwrap();
    let manager = fresh_manager(&dir).await;

    let milk = manager.add("Milk").await.unwrap();
    let eggs = manager.add("Eggs").await.unwrap();

    // Edit the first item through the submit path.
    manager.start_edit(milk).await.unwrap();
    manager.submit("Bread").await.unwrap();
    assert_eq!(manager.edit_state().await, EditState::Idle);

    // Delete the first item; the second survives unchanged.
    manager.delete(milk).await.unwrap();
    let view = manager.view().await;
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].id, eggs);
    assert_eq!(view.items[0].value, "Eggs");
}

#[tokio::test]
async fn list_survives_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("list.json");

    {
        let manager = ListManager::new(FileListStorage::new(&path), Notifier::new());
        manager.initialize().await.unwrap();
        manager.add("Milk").await.unwrap();
        manager.add("Eggs").await.unwrap();
    }

    let manager = ListManager::new(FileListStorage::new(&path), Notifier::new());
    manager.initialize().await.unwrap();

    let view = manager.view().await;
    let values: Vec<_> = view.items.iter().map(|i| i.value.as_str()).collect();
    assert_eq!(values, ["Milk", "Eggs"]);
    assert!(view.container_visible);
}

#[tokio::test]
async fn clear_all_leaves_no_trace_in_storage() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("list.json");
    let storage = FileListStorage::new(&path);

    let manager = ListManager::new(storage.clone(), Notifier::new());
    manager.initialize().await.unwrap();
    manager.add("Milk").await.unwrap();

    manager.clear_all().await.unwrap();
    assert!(!storage.exists().await);

    // A fresh start over the same path is indistinguishable from
    // never having used the app.
    let manager = ListManager::new(storage, Notifier::new());
    manager.initialize().await.unwrap();
    assert!(manager.view().await.items.is_empty());
}

#[tokio::test]
async fn mixed_validation_failures_leave_state_untouched() {
    let dir = tempdir().unwrap();
    let manager = fresh_manager(&dir).await;

    assert!(matches!(
        manager.submit("").await,
        Err(ListError::EmptyValue)
    ));
    assert!(manager.view().await.items.is_empty());

    let milk = manager.add("Milk").await.unwrap();
    manager.start_edit(milk).await.unwrap();
    assert!(matches!(
        manager.submit("").await,
        Err(ListError::EmptyValue)
    ));

    // The failed edit is still pending and commits on the next submit.
    manager.submit("Oat Milk").await.unwrap();
    assert_eq!(manager.view().await.items[0].value, "Oat Milk");
}
