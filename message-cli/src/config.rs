//! Runtime configuration loaded from the environment.
//!
//! Reads DATABASE_URL and LOG_FILE; call `dotenvy::dotenv()` first so `.env` values apply.

use anyhow::Result;
use std::env;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://message_board.db";
pub const DEFAULT_LOG_FILE: &str = "logs/message-store.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub log_file: String,
}

impl AppConfig {
    /// Loads config from the environment. `database_url`, when given, overrides DATABASE_URL.
    pub fn load(database_url: Option<String>) -> Result<Self> {
        let database_url = match database_url {
            Some(url) => url,
            None => env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
        };
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        if database_url.trim().is_empty() {
            anyhow::bail!("DATABASE_URL is empty");
        }

        Ok(Self {
            database_url,
            log_file,
        })
    }
}
