//! Command execution against any [`MessageRepository`].
//!
//! Results are written to `out` so the same code serves stdout and tests.

use std::io::Write;

use anyhow::{Context, Result};
use message_store::{Message, MessageRepository, NewMessage, StorageError};
use tracing::info;

use crate::cli::Commands;
use crate::validation::validate_message_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Runs one CLI command.
///
/// `get` of a missing id prints a notice and succeeds; `edit`/`delete` of a missing
/// id fail with [`StorageError::NotFound`] in the error chain.
pub async fn execute<R>(
    repo: &R,
    command: Commands,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()>
where
    R: MessageRepository + ?Sized,
{
    match command {
        Commands::Get { message_id } => {
            let message = repo
                .get_message(message_id)
                .await
                .with_context(|| format!("Get message {}", message_id))?;
            match message {
                Some(message) => write_messages(out, format, &[message])?,
                None => match format {
                    OutputFormat::Json => write_messages(out, format, &[])?,
                    OutputFormat::Table => writeln!(out, "Message {} not found", message_id)?,
                },
            }
        }
        Commands::List { posted_by } => {
            let messages = match posted_by {
                Some(account_id) => repo
                    .get_all_messages_for_user(account_id)
                    .await
                    .with_context(|| format!("List messages posted by {}", account_id))?,
                None => repo.get_all_messages().await.context("List messages")?,
            };
            write_messages(out, format, &messages)?;
        }
        Commands::Post {
            posted_by,
            text,
            at,
        } => {
            validate_message_text(&text)?;
            let time_posted_epoch = at.unwrap_or_else(|| chrono::Utc::now().timestamp());
            let candidate = NewMessage::new(posted_by, text, time_posted_epoch);
            let message = repo.insert(&candidate).await.context("Insert message")?;
            info!(message_id = message.message_id, "Posted message");
            write_messages(out, format, &[message])?;
        }
        Commands::Edit { message_id, text } => {
            validate_message_text(&text)?;
            let message = repo
                .update(message_id, &text)
                .await
                .with_context(|| format!("Update message {}", message_id))?;
            write_messages(out, format, &[message])?;
        }
        Commands::Delete { message_id } => {
            let message = repo
                .delete(message_id)
                .await
                .with_context(|| format!("Delete message {}", message_id))?;
            write_messages(out, format, &[message])?;
        }
    }
    Ok(())
}

/// Process exit code for a failed command.
pub const EXIT_FAILURE: u8 = 1;
/// Exit code when `edit`/`delete` target a message that does not exist.
pub const EXIT_NOT_FOUND: u8 = 2;

/// Maps a command error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    if is_not_found(err) {
        EXIT_NOT_FOUND
    } else {
        EXIT_FAILURE
    }
}

fn is_not_found(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<StorageError>()
            .is_some_and(StorageError::is_not_found)
    })
}

const TEXT_PREVIEW_LEN: usize = 60;

fn write_messages(out: &mut dyn Write, format: OutputFormat, messages: &[Message]) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, messages)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            if messages.is_empty() {
                writeln!(out, "No messages.")?;
                return Ok(());
            }
            writeln!(
                out,
                "{:<10} {:<10} {:<20} {}",
                "id", "posted_by", "posted_at", "text"
            )?;
            writeln!(out, "{}", "-".repeat(100))?;
            for m in messages {
                let posted_at =
                    chrono::DateTime::<chrono::Utc>::from_timestamp(m.time_posted_epoch, 0)
                        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                        .unwrap_or_else(|| m.time_posted_epoch.to_string());
                let preview: String = m
                    .message_text
                    .chars()
                    .take(TEXT_PREVIEW_LEN)
                    .collect::<String>()
                    .replace('\n', " ");
                writeln!(
                    out,
                    "{:<10} {:<10} {:<20} {}",
                    m.message_id, m.posted_by, posted_at, preview
                )?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;
    use message_store::MessageStore;

    async fn setup() -> MessageStore {
        MessageStore::connect("sqlite::memory:")
            .await
            .expect("Failed to create store")
    }

    async fn run(store: &MessageStore, command: Commands, format: OutputFormat) -> Result<String> {
        let mut out = Vec::new();
        execute(store, command, format, &mut out).await?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_post_then_get_json() {
        let store = setup().await;

        let posted = run(
            &store,
            Commands::Post {
                posted_by: 1,
                text: "hello".to_string(),
                at: Some(1000),
            },
            OutputFormat::Json,
        )
        .await
        .unwrap();
        let posted: Vec<Message> = serde_json::from_str(&posted).unwrap();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].message_text, "hello");
        assert_eq!(posted[0].time_posted_epoch, 1000);

        let fetched = run(
            &store,
            Commands::Get {
                message_id: posted[0].message_id,
            },
            OutputFormat::Json,
        )
        .await
        .unwrap();
        let fetched: Vec<Message> = serde_json::from_str(&fetched).unwrap();
        assert_eq!(fetched, posted);
    }

    #[tokio::test]
    async fn test_post_defaults_time_to_now() {
        let store = setup().await;
        let before = chrono::Utc::now().timestamp();

        run(
            &store,
            Commands::Post {
                posted_by: 1,
                text: "now".to_string(),
                at: None,
            },
            OutputFormat::Table,
        )
        .await
        .unwrap();

        let all = store.get_all_messages().await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].time_posted_epoch >= before);
    }

    #[tokio::test]
    async fn test_post_blank_text_is_rejected_before_insert() {
        let store = setup().await;

        let err = run(
            &store,
            Commands::Post {
                posted_by: 1,
                text: "   ".to_string(),
                at: Some(1),
            },
            OutputFormat::Table,
        )
        .await
        .expect_err("Blank text should be rejected");

        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::BlankText)
        );
        assert!(store.get_all_messages().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_edit_too_long_leaves_message_unchanged() {
        let store = setup().await;
        let message = store
            .insert(&NewMessage::new(1, "original", 1))
            .await
            .unwrap();

        let result = run(
            &store,
            Commands::Edit {
                message_id: message.message_id,
                text: "x".repeat(256),
            },
            OutputFormat::Table,
        )
        .await;

        assert!(result.is_err());
        assert_eq!(
            store.get_message(message.message_id).await.unwrap(),
            Some(message)
        );
    }

    #[tokio::test]
    async fn test_get_missing_prints_notice() {
        let store = setup().await;

        let output = run(&store, Commands::Get { message_id: 5 }, OutputFormat::Table)
            .await
            .unwrap();

        assert_eq!(output, "Message 5 not found\n");
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let store = setup().await;

        let err = run(&store, Commands::Delete { message_id: 5 }, OutputFormat::Table)
            .await
            .expect_err("Delete of missing message should fail");

        assert!(is_not_found(&err));
        assert_eq!(exit_code(&err), EXIT_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_missing_json_is_empty_array() {
        let store = setup().await;

        let output = run(&store, Commands::Get { message_id: 5 }, OutputFormat::Json)
            .await
            .unwrap();

        let parsed: Vec<Message> = serde_json::from_str(&output).expect("Output should be JSON");
        assert!(parsed.is_empty());
    }

    #[tokio::test]
    async fn test_validation_and_storage_failures_exit_one() {
        let store = setup().await;

        let validation_err = run(
            &store,
            Commands::Edit {
                message_id: 1,
                text: String::new(),
            },
            OutputFormat::Table,
        )
        .await
        .expect_err("Blank edit should fail");
        assert_eq!(exit_code(&validation_err), EXIT_FAILURE);

        let pool_manager = message_store::SqlitePoolManager::new("sqlite::memory:")
            .await
            .unwrap();
        let uninitialized = MessageStore::new(pool_manager);
        let storage_err = run(
            &uninitialized,
            Commands::Delete { message_id: 1 },
            OutputFormat::Table,
        )
        .await
        .expect_err("Delete without schema should fail");
        assert!(!is_not_found(&storage_err));
        assert_eq!(exit_code(&storage_err), EXIT_FAILURE);
    }

    #[tokio::test]
    async fn test_list_table_filters_by_account() {
        let store = setup().await;
        store
            .insert(&NewMessage::new(1, "mine", 0))
            .await
            .unwrap();
        store
            .insert(&NewMessage::new(2, "theirs", 0))
            .await
            .unwrap();

        let output = run(
            &store,
            Commands::List { posted_by: Some(1) },
            OutputFormat::Table,
        )
        .await
        .unwrap();

        assert!(output.contains("mine"));
        assert!(!output.contains("theirs"));
        assert!(output.contains("1970-01-01 00:00:00"));
    }

    #[tokio::test]
    async fn test_list_empty_table() {
        let store = setup().await;

        let output = run(&store, Commands::List { posted_by: None }, OutputFormat::Table)
            .await
            .unwrap();

        assert_eq!(output, "No messages.\n");
    }

    #[tokio::test]
    async fn test_edit_then_delete() {
        let store = setup().await;
        let message = store
            .insert(&NewMessage::new(1, "hello", 1000))
            .await
            .unwrap();

        let edited = run(
            &store,
            Commands::Edit {
                message_id: message.message_id,
                text: "bye".to_string(),
            },
            OutputFormat::Json,
        )
        .await
        .unwrap();
        let edited: Vec<Message> = serde_json::from_str(&edited).unwrap();
        assert_eq!(edited[0].message_text, "bye");
        assert_eq!(edited[0].time_posted_epoch, 1000);

        run(
            &store,
            Commands::Delete {
                message_id: message.message_id,
            },
            OutputFormat::Json,
        )
        .await
        .unwrap();

        assert!(store
            .get_message(message.message_id)
            .await
            .unwrap()
            .is_none());
    }
}
