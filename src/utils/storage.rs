//! Persistence for editor content
//!
//! The editor saves its markup under a fixed key after every mutation and
//! loads it once at startup. The store itself is a collaborator:
//!
//! - `MemoryStore`: in-memory map (testing, WASM hosts that sync to localStorage)
//! - `NoopStore`: remembers nothing
//! - `FileStore`: JSON object of key -> markup in one file (native only)

use std::collections::HashMap;

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use crate::utils::error::{EditorError, EditorResult};

/// Key-value store holding serialized editor markup
pub trait Store {
    /// Persist `markup` under `key`
    fn save(&mut self, key: &str, markup: &str) -> EditorResult<()>;

    /// Read back what was last saved under `key`
    fn load(&self, key: &str) -> EditorResult<Option<String>>;
}

/// In-memory store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with one entry
    pub fn with_entry(key: &str, markup: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), markup.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Store for MemoryStore {
    fn save(&mut self, key: &str, markup: &str) -> EditorResult<()> {
        self.entries.insert(key.to_string(), markup.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> EditorResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }
}

/// Store that persists nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStore;

impl Store for NoopStore {
    fn save(&mut self, _key: &str, _markup: &str) -> EditorResult<()> {
        Ok(())
    }

    fn load(&self, _key: &str) -> EditorResult<Option<String>> {
        Ok(None)
    }
}

/// File-backed store: one JSON object mapping keys to markup
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> EditorResult<HashMap<String, String>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(HashMap::new())
            }
            Err(err) => return Err(EditorError::storage(err.to_string())),
        };

        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }

        serde_json::from_str(&content).map_err(|e| EditorError::storage(e.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Store for FileStore {
    fn save(&mut self, key: &str, markup: &str) -> EditorResult<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), markup.to_string());

        let json =
            serde_json::to_string_pretty(&entries).map_err(|e| EditorError::storage(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| EditorError::storage(e.to_string()))
    }

    fn load(&self, key: &str) -> EditorResult<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }
}
