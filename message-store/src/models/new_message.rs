//! Insertion candidate: a message before the database assigns its id.

use serde::{Deserialize, Serialize};

use super::Message;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMessage {
    pub posted_by: i64,
    pub message_text: String,
    pub time_posted_epoch: i64,
}

impl NewMessage {
    pub fn new(posted_by: i64, message_text: impl Into<String>, time_posted_epoch: i64) -> Self {
        Self {
            posted_by,
            message_text: message_text.into(),
            time_posted_epoch,
        }
    }

    /// Builds the stored record once the database has assigned `message_id`.
    pub fn into_message(self, message_id: i64) -> Message {
        Message {
            message_id,
            posted_by: self.posted_by,
            message_text: self.message_text,
            time_posted_epoch: self.time_posted_epoch,
        }
    }
}
