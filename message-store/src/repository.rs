use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Message, NewMessage};

/// CRUD operations over the `message` table.
///
/// Reads report a missing row as `Ok(None)` or an empty vec; `delete` and
/// `update` report it as [`StorageError::NotFound`](crate::StorageError::NotFound).
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn get_message(&self, message_id: i64) -> Result<Option<Message>>;
    async fn get_all_messages_for_user(&self, account_id: i64) -> Result<Vec<Message>>;
    async fn get_all_messages(&self) -> Result<Vec<Message>>;
    async fn insert(&self, candidate: &NewMessage) -> Result<Message>;
    async fn delete(&self, message_id: i64) -> Result<Message>;
    async fn update(&self, message_id: i64, new_text: &str) -> Result<Message>;
}
