mod config;
pub mod database;
pub mod memory;
mod settings;

pub use config::{AppConfig, LoggingConfig, StorageConfig};
pub use database::Database;
pub use memory::MemoryStore;
pub use settings::{Language, Settings};

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::StoreError;

/// Keys under which records are persisted.
pub mod keys {
    pub const SESSION: &str = "mantra-state";
    pub const STATS: &str = "mantra-stats";
    pub const CUSTOM_MANTRAS: &str = "custom-mantras";
    pub const FAVORITES: &str = "favorite-mantras";
    pub const SETTINGS: &str = "mantra-settings";
}

/// Durable storage for named JSON values.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Write every entry or none of them.
    fn set_many(&mut self, entries: &[(&str, String)]) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn set_many(&mut self, entries: &[(&str, String)]) -> Result<(), StoreError> {
        (**self).set_many(entries)
    }
}

/// Read and decode a record, falling back to `T::default()` when the key is
/// absent or the stored JSON no longer parses.
///
/// # Errors
/// Only a failing store read is an error.
pub fn read_record<T, S>(store: &S, key: &str) -> Result<T, StoreError>
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(T::default());
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(err) => {
            warn!(key, error = %err, "discarding malformed stored record");
            Ok(T::default())
        }
    }
}

/// Returns the data directory.
///
/// `JAPAMALA_HOME` wins when set. Otherwise `~/.config/japamala`, or
/// `~/.config/japamala-dev` when `JAPAMALA_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("JAPAMALA_HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("JAPAMALA_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("japamala-dev")
            } else {
                base_dir.join("japamala")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
