//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "msgstore")]
#[command(about = "Message store CLI: get, list, post, edit, delete", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database URL; overrides DATABASE_URL.
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    /// Print records as JSON instead of a table.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show one message by id.
    Get { message_id: i64 },
    /// List all messages, or only those posted by one account.
    List {
        #[arg(long)]
        posted_by: Option<i64>,
    },
    /// Post a new message (time defaults to now).
    Post {
        #[arg(long)]
        posted_by: i64,
        #[arg(short, long)]
        text: String,
        /// Seconds since the Unix epoch.
        #[arg(long)]
        at: Option<i64>,
    },
    /// Replace the text of a message.
    Edit {
        message_id: i64,
        #[arg(short, long)]
        text: String,
    },
    /// Delete a message and print what was removed.
    Delete { message_id: i64 },
}
