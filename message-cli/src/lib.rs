//! # message-cli
//!
//! Command-line caller for the message store: argument parsing, config loading,
//! tracing setup, text validation and command execution.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logger;
pub mod validation;

pub use cli::{Cli, Commands};
pub use commands::{execute, exit_code, OutputFormat, EXIT_FAILURE, EXIT_NOT_FOUND};
pub use config::AppConfig;
pub use logger::init_tracing;
pub use validation::{validate_message_text, ValidationError, MAX_MESSAGE_LEN};
