//! Message store: persistence and queries for the `message` table.
//!
//! Uses SqlitePoolManager as its connection provider and the models (Message, NewMessage).
//! External: SQLite via sqlx; callers go through the MessageRepository trait.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::{Result, StorageError};
use crate::models::{Message, NewMessage};
use crate::repository::MessageRepository;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct MessageStore {
    pool_manager: SqlitePoolManager,
}

impl MessageStore {
    /// Wraps an existing pool manager. The schema is not touched; call [`init`](Self::init) if needed.
    pub fn new(pool_manager: SqlitePoolManager) -> Self {
        Self { pool_manager }
    }

    /// Opens `database_url` and creates the schema if it does not exist.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let store = Self::new(pool_manager);
        store.init().await?;
        Ok(store)
    }

    pub async fn init(&self) -> Result<()> {
        info!("Creating message table if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS message (
                message_id INTEGER PRIMARY KEY AUTOINCREMENT,
                posted_by INTEGER NOT NULL,
                message_text TEXT NOT NULL,
                time_posted_epoch INTEGER NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_message_posted_by ON message(posted_by)")
            .execute(pool)
            .await?;

        info!("Message table ready");
        Ok(())
    }

    pub fn pool_manager(&self) -> &SqlitePoolManager {
        &self.pool_manager
    }
}

#[async_trait]
impl MessageRepository for MessageStore {
    async fn get_message(&self, message_id: i64) -> Result<Option<Message>> {
        let pool = self.pool_manager.pool();

        let message = sqlx::query_as::<_, Message>("SELECT * FROM message WHERE message_id = ?")
            .bind(message_id)
            .fetch_optional(pool)
            .await?;

        debug!(message_id, found = message.is_some(), "Looked up message");
        Ok(message)
    }

    async fn get_all_messages_for_user(&self, account_id: i64) -> Result<Vec<Message>> {
        let pool = self.pool_manager.pool();

        let messages = sqlx::query_as::<_, Message>("SELECT * FROM message WHERE posted_by = ?")
            .bind(account_id)
            .fetch_all(pool)
            .await?;

        debug!(
            "Retrieved {} messages posted by account {}",
            messages.len(),
            account_id
        );
        Ok(messages)
    }

    async fn get_all_messages(&self) -> Result<Vec<Message>> {
        let pool = self.pool_manager.pool();

        let messages = sqlx::query_as::<_, Message>("SELECT * FROM message")
            .fetch_all(pool)
            .await?;

        debug!("Retrieved {} messages", messages.len());
        Ok(messages)
    }

    async fn insert(&self, candidate: &NewMessage) -> Result<Message> {
        let pool = self.pool_manager.pool();

        let result = sqlx::query(
            r#"
            INSERT INTO message (posted_by, message_text, time_posted_epoch)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(candidate.posted_by)
        .bind(&candidate.message_text)
        .bind(candidate.time_posted_epoch)
        .execute(pool)
        .await?;

        let message = candidate.clone().into_message(result.last_insert_rowid());

        info!(
            "Saved message: id={}, posted_by={}",
            message.message_id, message.posted_by
        );
        Ok(message)
    }

    async fn delete(&self, message_id: i64) -> Result<Message> {
        let pool = self.pool_manager.pool();

        let message =
            sqlx::query_as::<_, Message>("DELETE FROM message WHERE message_id = ? RETURNING *")
                .bind(message_id)
                .fetch_optional(pool)
                .await?
                .ok_or(StorageError::NotFound(message_id))?;

        info!("Deleted message: id={}", message_id);
        Ok(message)
    }

    async fn update(&self, message_id: i64, new_text: &str) -> Result<Message> {
        let pool = self.pool_manager.pool();

        let message = sqlx::query_as::<_, Message>(
            "UPDATE message SET message_text = ? WHERE message_id = ? RETURNING *",
        )
        .bind(new_text)
        .bind(message_id)
        .fetch_optional(pool)
        .await?
        .ok_or(StorageError::NotFound(message_id))?;

        info!("Updated message text: id={}", message_id);
        Ok(message)
    }
}
