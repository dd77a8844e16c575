//! Durable key-value storage
//!
//! Boolean settings persisted across process restarts. `JsonFileStore` keeps
//! them in a flat JSON object on disk; `MemoryStore` keeps them in a shared
//! map so tests can simulate a restart by opening a second handle.

use log::{debug, warn};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::StoreError;

pub trait KeyValueStore: Send {
    fn get_bool(&self, key: &str) -> Result<Option<bool>, StoreError>;
    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), StoreError>;
}

/// Settings stored as a JSON object in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, Value>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(Map::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(StoreError::from(e)),
        }
    }

    fn write_map(&self, map: &Map<String, Value>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // Write-then-rename so a crash never leaves a truncated file behind.
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, serde_json::to_vec_pretty(map)?)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_bool(&self, key: &str) -> Result<Option<bool>, StoreError> {
        match self.read_map()?.get(key) {
            None => Ok(None),
            Some(Value::Bool(value)) => Ok(Some(*value)),
            Some(other) => Err(StoreError::InvalidValue {
                key: key.to_string(),
                found: other.to_string(),
            }),
        }
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), StoreError> {
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(StoreError::Io(e)) => return Err(StoreError::Io(e)),
            Err(e) => {
                warn!("Replacing unreadable {}: {}", self.path.display(), e);
                Map::new()
            }
        };
        map.insert(key.to_string(), Value::Bool(value));
        self.write_map(&map)?;
        debug!("Persisted {} = {} to {}", key, value, self.path.display());
        Ok(())
    }
}

/// Settings kept in memory. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, bool>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_bool(&self, key: &str) -> Result<Option<bool>, StoreError> {
        let values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        Ok(values.get(key).copied())
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), StoreError> {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value);
        Ok(())
    }
}
