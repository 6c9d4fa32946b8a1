//! Save/load persistence
//!
//! Features:
//! - Versioned JSON records (save data and configuration)
//! - Pluggable key-value stores (files on native, LocalStorage on web, memory)
//! - Missing or corrupted records fall back to defaults

pub mod save;
pub mod store;

pub use save::SaveData;
pub use store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub use store::FileStore;
#[cfg(target_arch = "wasm32")]
pub use store::LocalStorageStore;

use core::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Errors from reading or writing persisted records
#[derive(Debug)]
pub enum PersistError {
    /// Filesystem failure
    Io(std::io::Error),
    /// Record could not be encoded or decoded
    Json(serde_json::Error),
    /// No storage backend (e.g. LocalStorage disabled)
    Unavailable,
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "storage I/O error: {}", e),
            Self::Json(e) => write!(f, "malformed record: {}", e),
            Self::Unavailable => write!(f, "storage unavailable"),
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Unavailable => None,
        }
    }
}

impl From<std::io::Error> for PersistError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// A key-value store of JSON documents
pub trait Store {
    /// Read the document under `key`, `Ok(None)` if there is none
    fn read(&self, key: &str) -> Result<Option<String>, PersistError>;

    fn write(&mut self, key: &str, json: &str) -> Result<(), PersistError>;
}

/// Outcome of loading a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Decoded from the store
    Stored,
    /// Nothing stored yet
    Missing,
    /// Stored but unreadable; default used
    Corrupted,
}

/// Load `key`, substituting `T::default()` when it is missing or unreadable
pub fn load_or_default<T, S>(store: &S, key: &str) -> (T, LoadSource)
where
    T: DeserializeOwned + Default,
    S: Store + ?Sized,
{
    match store.read(key) {
        Ok(Some(json)) => match serde_json::from_str(&json) {
            Ok(value) => {
                log::info!("Loaded {}", key);
                (value, LoadSource::Stored)
            }
            Err(e) => {
                log::warn!("Ignoring malformed {}: {}", key, e);
                (T::default(), LoadSource::Corrupted)
            }
        },
        Ok(None) => {
            log::info!("No {} found, starting fresh", key);
            (T::default(), LoadSource::Missing)
        }
        Err(e) => {
            log::warn!("Failed to read {}: {}", key, e);
            (T::default(), LoadSource::Corrupted)
        }
    }
}

/// Encode `value` as pretty JSON and write it under `key`
pub fn store_record<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), PersistError>
where
    T: Serialize,
    S: Store + ?Sized,
{
    let json = serde_json::to_string_pretty(value)?;
    store.write(key, &json)?;
    log::info!("Saved {}", key);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Config;

    #[test]
    fn test_missing_record_is_default() {
        let store = MemoryStore::new();
        let (config, source): (Config, _) = load_or_default(&store, "cfg");
        assert_eq!(source, LoadSource::Missing);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_corrupted_record_is_default() {
        let mut store = MemoryStore::new();
        store.write("save", "{ not json").unwrap();
        let (save, source): (SaveData, _) = load_or_default(&store, "save");
        assert_eq!(source, LoadSource::Corrupted);
        assert_eq!(save.level, 1);
        assert_eq!(save.points, 0);
    }

    #[test]
    fn test_store_then_load() {
        let mut store = MemoryStore::new();
        let save = SaveData {
            points: 1234,
            level: 7,
            times_clicked: 900,
            passive_income: 6,
            ..SaveData::default()
        };
        store_record(&mut store, "save", &save).unwrap();

        let (loaded, source): (SaveData, _) = load_or_default(&store, "save");
        assert_eq!(source, LoadSource::Stored);
        assert_eq!(loaded, save);
    }

    #[test]
    fn test_error_display() {
        let err = PersistError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert!(err.to_string().contains("disk full"));
        assert_eq!(PersistError::Unavailable.to_string(), "storage unavailable");
    }
}
