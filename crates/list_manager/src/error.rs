//! List manager error types

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ListError {
    #[error("Please Enter A Value")]
    EmptyValue,

    #[error("No item with id {0}")]
    ItemNotFound(Uuid),

    #[error("Storage error: {0}")]
    Storage(#[from] storage_manager::StorageError),
}

pub type Result<T> = std::result::Result<T, ListError>;
