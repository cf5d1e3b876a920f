//! # List Manager
//!
//! The service that owns the grocery list. It holds the authoritative
//! in-memory model, the editing state machine, and a storage backend,
//! and keeps the three consistent across every operation. UIs render
//! the derived [`view::ListView`]; they never hold list state of
//! their own.

pub mod error;
pub mod manager;
pub mod view;

// Re-exports
pub use error::ListError;
pub use manager::ListManager;
pub use view::ListView;
