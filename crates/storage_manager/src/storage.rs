//! List storage trait and implementations

use crate::error::Result;
use async_trait::async_trait;
use grocery_core::GroceryList;
use std::path::{Path, PathBuf};
use tokio::fs;

/// List storage trait
#[async_trait]
pub trait ListStorage: Send + Sync {
    /// Load the stored list. Absent or unreadable data loads as the
    /// empty list, never as an error.
    async fn load(&self) -> Result<GroceryList>;

    /// Save the list, fully overwriting prior content.
    async fn save(&self, list: &GroceryList) -> Result<()>;

    /// Remove the stored list entirely.
    async fn clear(&self) -> Result<()>;

    /// Check whether anything is stored.
    async fn exists(&self) -> bool;
}

/// File-based list storage: one JSON file holding the items in
/// display order.
#[derive(Clone)]
pub struct FileListStorage {
    path: PathBuf,
}

impl FileListStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ListStorage for FileListStorage {
    async fn load(&self) -> Result<GroceryList> {
        if !self.path.exists() {
            return Ok(GroceryList::new());
        }

        let contents = fs::read_to_string(&self.path).await?;

        match serde_json::from_str(&contents) {
            Ok(list) => Ok(list),
            Err(e) => {
                // Malformed content must not take the whole
                // application down; it reads as an empty list.
                tracing::warn!(path = %self.path.display(), error = %e, "stored list unreadable, treating as empty");
                Ok(GroceryList::new())
            }
        }
    }

    async fn save(&self, list: &GroceryList) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let contents = serde_json::to_string_pretty(list)?;
        fs::write(&self.path, contents).await?;

        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).await?;
        }

        Ok(())
    }

    async fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grocery_core::GroceryItem;
    use tempfile::tempdir;

    fn storage_in(dir: &tempfile::TempDir) -> FileListStorage {
        FileListStorage::new(dir.path().join("list.json"))
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let storage = storage_in(&dir);

        let mut list = GroceryList::new();
        list.push(GroceryItem::new("Milk"));
        list.push(GroceryItem::new("Eggs"));
        storage.save(&list).await.unwrap();

        let loaded = storage.load().await.unwrap();
        assert_eq!(loaded, list);
    }

    #[tokio::test]
    async fn test_load_absent_is_empty() {
        let dir = tempdir().unwrap();
        let storage = storage_in(&dir);

        let loaded = storage.load().await.unwrap();
        assert!(loaded.is_empty());
        assert!(!storage.exists().await);
    }

    #[tokio::test]
    async fn test_load_malformed_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("list.json");
        std::fs::write(&path, "{ not json").unwrap();

        let storage = FileListStorage::new(&path);
        let loaded = storage.load().await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let dir = tempdir().unwrap();
        let storage = storage_in(&dir);

        let mut first = GroceryList::new();
        first.push(GroceryItem::new("Milk"));
        storage.save(&first).await.unwrap();

        let second = GroceryList::new();
        storage.save(&second).await.unwrap();

        let loaded = storage.load().await.unwrap();
        assert!(loaded.is_empty());
        // An empty list is still stored, unlike a cleared one.
        assert!(storage.exists().await);
    }

    #[tokio::test]
    async fn test_clear_removes_the_file() {
        let dir = tempdir().unwrap();
        let storage = storage_in(&dir);

        let mut list = GroceryList::new();
        list.push(GroceryItem::new("Milk"));
        storage.save(&list).await.unwrap();
        assert!(storage.exists().await);

        storage.clear().await.unwrap();
        assert!(!storage.exists().await);
        assert!(storage.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_when_never_used() {
        let dir = tempdir().unwrap();
        let storage = storage_in(&dir);

        storage.clear().await.unwrap();
        assert!(!storage.exists().await);
    }
}
