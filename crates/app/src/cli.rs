use std::path::PathBuf;

use clap::{Parser, Subcommand};
use guestbook_core::CommentId;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory holding the comment slot; overrides GUESTBOOK_DATA_DIR.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print comments, newest first.
    List,
    Add {
        #[arg(long)]
        author: String,
        #[arg(long)]
        body: String,
    },
    /// Replace the author and body of an existing comment.
    Edit {
        id: CommentId,
        #[arg(long)]
        author: String,
        #[arg(long)]
        body: String,
    },
    Delete {
        id: CommentId,
    },
    /// Interactive comment form (default).
    Shell,
}
