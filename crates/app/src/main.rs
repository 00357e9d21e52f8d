mod cli;
mod config;
mod render;
mod shell;
mod wiring;

use std::io::{self, Write};

use clap::Parser;
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::ConfigError;
use crate::shell::ShellError;
use crate::wiring::WiringError;
use guestbook_core::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("wiring error: {0}")]
    Wiring(#[from] WiringError),
    #[error("{0}")]
    Store(#[from] StoreError),
    #[error("shell error: {0}")]
    Shell(#[from] ShellError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

fn main() -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    config::load_dotenv()?;
    let mut config = config::AppConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    info!(data_dir = %config.data_dir.display(), slot = %config.slot, "opening comment store");
    let mut store = wiring::build_store(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command.unwrap_or(Command::Shell) {
        Command::List => render::write_comments(&mut out, store.list())?,
        Command::Add { author, body } => {
            let comment = store.add(&author, &body)?;
            render::write_comment(&mut out, &comment)?;
        }
        Command::Edit { id, author, body } => {
            store.begin_edit(id)?;
            if let Some(comment) = store.update(&author, &body)? {
                render::write_comment(&mut out, &comment)?;
            }
        }
        Command::Delete { id } => {
            if store.get(id).is_none() {
                warn!(id = %id, "comment not present, nothing to delete");
            }
            store.delete(id)?;
        }
        Command::Shell => {
            let stdin = io::stdin();
            shell::run(&mut store, stdin.lock(), &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}
