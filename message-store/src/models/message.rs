//! Message model for persistence.
//!
//! Maps to the `message` table and is returned by every MessageRepository read.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    pub message_id: i64,
    /// Account id of the author. Existence is checked by the caller.
    pub posted_by: i64,
    pub message_text: String,
    /// Seconds since the Unix epoch.
    pub time_posted_epoch: i64,
}
