//! Message text rules enforced by the caller before writing to the store.

use thiserror::Error;

/// Longest accepted message text, in characters.
pub const MAX_MESSAGE_LEN: usize = 255;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Message text must not be blank")]
    BlankText,
    #[error("Message text is {len} characters, limit is {max}")]
    TooLong { len: usize, max: usize },
}

pub fn validate_message_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::BlankText);
    }
    let len = text.chars().count();
    if len > MAX_MESSAGE_LEN {
        return Err(ValidationError::TooLong {
            len,
            max: MAX_MESSAGE_LEN,
        });
    }
    Ok(())
}
