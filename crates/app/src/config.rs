use std::path::{Path, PathBuf};

use thiserror::Error;

use guestbook_core::{DEFAULT_TIMESTAMP_FORMAT, StoreOptions};
use guestbook_infra::storage::is_valid_slot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub slot: String,
    pub store_options: StoreOptions,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let data_dir = PathBuf::from(read("GUESTBOOK_DATA_DIR", "./data"));
        let slot = read("GUESTBOOK_SLOT", "comments");
        if !is_valid_slot(&slot) {
            return Err(ConfigError::InvalidValue("GUESTBOOK_SLOT", slot));
        }
        // Formats keep their surrounding whitespace, only blank ones fall back.
        let timestamp_format = lookup("GUESTBOOK_TIMESTAMP_FORMAT")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TIMESTAMP_FORMAT.to_string());
        let store_options = StoreOptions::new(timestamp_format.as_str()).map_err(|_| {
            ConfigError::InvalidValue("GUESTBOOK_TIMESTAMP_FORMAT", timestamp_format.clone())
        })?;

        Ok(Self {
            data_dir,
            slot,
            store_options,
        })
    }
}

/// Exports `.env` entries that are not already set in the environment.
pub fn load_dotenv() -> Result<(), std::io::Error> {
    let path = Path::new(".env");
    if !path.exists() {
        return Ok(());
    }
    let contents = std::fs::read_to_string(path)?;
    for (key, value) in contents.lines().filter_map(parse_dotenv_line) {
        if std::env::var_os(&key).is_none() {
            // Safety: invoked during startup before any threads are spawned.
            unsafe {
                std::env::set_var(key, value);
            }
        }
    }
    Ok(())
}

fn parse_dotenv_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, raw) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    let raw = raw.trim();
    let value = if let Some(inner) = raw.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        unescape(inner)
    } else if let Some(inner) = raw.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')) {
        inner.to_string()
    } else {
        raw.to_string()
    };
    Some((key.to_string(), value))
}

fn unescape(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            output.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => output.push('\n'),
            Some('r') => output.push('\r'),
            Some('t') => output.push('\t'),
            Some(escaped @ ('\\' | '"')) => output.push(escaped),
            Some(other) => {
                output.push('\\');
                output.push(other);
            }
            None => output.push('\\'),
        }
    }
    output
}
