//! Storage Module
//!
//! Opaque key-value persistence for user concepts and metrics.
//! Values are JSON strings; a blob that fails to parse is logged and treated
//! as absent so a corrupt file never blocks startup.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::error::{LabError, Result};
use crate::fs_manager::LabPaths;
use crate::metrics::MetricsState;
use crate::models::Concept;

/// Key under which the user's saved concepts are stored.
pub const USER_CONCEPTS_KEY: &str = "userConcepts";
/// Key under which the metrics tracker state is stored.
pub const METRICS_KEY: &str = "linguisticLabMetrics";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.entries.remove(key);
        Ok(())
    }
}

/// Stores each key as `<key>.json` in the store directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens the store, creating the directory layout when missing.
    pub fn open(paths: &LabPaths) -> Result<Self> {
        paths.init()?;
        Ok(Self {
            dir: paths.store_dir(),
        })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LabError::Storage(format!(
                "Failed to read {:?}: {}",
                path, e
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, value)
            .and_then(|_| fs::rename(&tmp, &path))
            .map_err(|e| LabError::Storage(format!("Failed to write {:?}: {}", path, e)))?;

        debug!(key, bytes = value.len(), "Stored value");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(LabError::Storage(format!(
                "Failed to remove {:?}: {}",
                path, e
            ))),
        }
    }
}

fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(LabError::Validation(format!("Invalid storage key: {:?}", key)))
    }
}

/// Reads and parses a JSON value. Unparseable blobs are logged and read as absent.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!(key, error = %e, "Ignoring corrupt stored value");
            Ok(None)
        }
    }
}

pub fn save_json<T: Serialize>(store: &mut dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

pub fn load_user_concepts(store: &dyn KeyValueStore) -> Result<Vec<Concept>> {
    Ok(load_json(store, USER_CONCEPTS_KEY)?.unwrap_or_default())
}

pub fn save_user_concepts(store: &mut dyn KeyValueStore, concepts: &[Concept]) -> Result<()> {
    save_json(store, USER_CONCEPTS_KEY, &concepts)
}

/// Loads the metrics state, starting a fresh one at `now` when none is stored.
pub fn load_metrics(store: &dyn KeyValueStore, now: DateTime<Utc>) -> Result<MetricsState> {
    Ok(load_json(store, METRICS_KEY)?.unwrap_or_else(|| MetricsState::new(now)))
}

pub fn save_metrics(store: &mut dyn KeyValueStore, state: &MetricsState) -> Result<()> {
    save_json(store, METRICS_KEY, state)
}
