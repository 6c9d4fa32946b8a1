//! Store backends

use std::collections::HashMap;

use super::{PersistError, Store};

/// In-memory store, for embedding without save files and for tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful writes so far
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.records.get(key).map(String::as_str)
    }
}

impl Store for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.records.get(key).cloned())
    }

    fn write(&mut self, key: &str, json: &str) -> Result<(), PersistError> {
        self.records.insert(key.to_string(), json.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// One JSON file per key inside a directory
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store next to the running executable
    pub fn beside_executable() -> Result<Self, PersistError> {
        let exe = std::env::current_exe()?;
        let dir = exe
            .parent()
            .map(std::path::Path::to_path_buf)
            .unwrap_or_default();
        Ok(Self::new(dir))
    }

    pub fn path(&self, key: &str) -> std::path::PathBuf {
        self.dir.join(key)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Store for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        match std::fs::read_to_string(self.path(key)) {
            Ok(json) => Ok(Some(json)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, json: &str) -> Result<(), PersistError> {
        // Write to a sibling first so a crash never leaves a truncated record
        let path = self.path(key);
        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// Browser LocalStorage, one item per key
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, PersistError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(PersistError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl Store for LocalStorageStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| PersistError::Unavailable)
    }

    fn write(&mut self, key: &str, json: &str) -> Result<(), PersistError> {
        Self::storage()?
            .set_item(key, json)
            .map_err(|_| PersistError::Unavailable)
    }
}
