use crate::error::{HomefinderError, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Durable string key-value storage, the browser local-storage analogue
pub trait KeyValueStorage: Send + Sync {
    /// Stored value, or `None` when the key was never written
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value under `key`
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// One file per key inside a storage directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.root.join(format!("{}.json", file))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(HomefinderError::Storage(format!(
                "failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.root).map_err(|e| {
            HomefinderError::Storage(format!("failed to create {}: {}", self.root.display(), e))
        })?;

        // Atomic replace: write a sibling temp file, then rename over the old value
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)
            .and_then(|_| std::fs::rename(&tmp, &path))
            .map_err(|e| {
                HomefinderError::Storage(format!("failed to write {}: {}", path.display(), e))
            })?;

        debug!("Persisted key '{}' to {}", key, path.display());
        Ok(())
    }
}

/// Process-local storage, used in tests and when persistence is disabled
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for std::sync::Arc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_round_trips_and_reports_absence() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested"));

        assert_eq!(storage.get_item("favorites").unwrap(), None);
        storage.set_item("favorites", r#"["1"]"#).unwrap();
        assert_eq!(storage.get_item("favorites").unwrap().as_deref(), Some(r#"["1"]"#));

        storage.set_item("favorites", "[]").unwrap();
        assert_eq!(storage.get_item("favorites").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn file_storage_sanitizes_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        storage.set_item("../escape", "x").unwrap();
        assert!(dir.path().join("___escape.json").exists());
    }
}
