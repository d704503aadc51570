//! Message store crate: persistence for short text messages posted by accounts.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – Message, NewMessage
//! - [`repository`] – MessageRepository trait
//! - [`message_repo`] – MessageStore (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod message_repo;
mod models;
mod repository;
mod sqlite_pool;


pub use error::{Result, StorageError};
pub use message_repo::MessageStore;
pub use models::{Message, NewMessage};
pub use repository::MessageRepository;
pub use sqlite_pool::SqlitePoolManager;
