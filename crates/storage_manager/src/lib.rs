//! # Storage Manager
//!
//! Persistence layer for the grocery list. One list lives in one JSON
//! file; every save rewrites the whole file, and clearing the list
//! removes the file itself, which keeps "emptied" distinguishable from
//! "never used".

pub mod error;
pub mod storage;

// Re-exports
pub use error::StorageError;
pub use storage::{FileListStorage, ListStorage};
