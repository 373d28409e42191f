//! File-backed preference store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use native_host::{validate_key, PreferencesStore, StoreError};

type PrefMap = BTreeMap<String, String>;

/// Default preference file name inside the preferences directory.
pub const DEFAULT_PREFS_FILE: &str = "prefs.json";

fn load_pref_map(path: &Path) -> Result<PrefMap, StoreError> {
    if !path.exists() {
        return Ok(PrefMap::new());
    }
    let raw = fs::read_to_string(path)
        .map_err(|err| StoreError::Io(format!("failed to read {}: {err}", path.display())))?;
    if raw.trim().is_empty() {
        return Ok(PrefMap::new());
    }
    serde_json::from_str(&raw).map_err(|err| {
        StoreError::Backend(format!(
            "failed to parse prefs map {}: {err}",
            path.display()
        ))
    })
}

fn save_pref_map(path: &Path, map: &PrefMap) -> Result<(), StoreError> {
    let serialized = serde_json::to_string(map)
        .map_err(|err| StoreError::Backend(format!("failed to serialize prefs map: {err}")))?;
    fs::write(path, serialized)
        .map_err(|err| StoreError::Io(format!("failed to write {}: {err}", path.display())))
}

#[derive(Debug)]
/// Preference store backed by a single JSON map file.
///
/// Every operation re-reads the file so values written by another process are observed. Writes
/// from this process are serialized; cross-process writers are last-write-wins.
pub struct FilePreferencesStore {
    file: PathBuf,
    write_lock: Mutex<()>,
}

impl FilePreferencesStore {
    /// Creates a store writing `prefs.json` under `root`.
    pub fn from_root(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::with_file_name(root, DEFAULT_PREFS_FILE)
    }

    /// Creates a store writing `file_name` under `root`, creating `root` if needed.
    pub fn with_file_name(root: impl AsRef<Path>, file_name: &str) -> Result<Self, StoreError> {
        let root = root.as_ref();
        fs::create_dir_all(root).map_err(|err| {
            StoreError::Io(format!(
                "failed to create prefs dir {}: {err}",
                root.display()
            ))
        })?;
        Ok(Self {
            file: root.join(file_name),
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the backing file.
    pub fn file(&self) -> &Path {
        &self.file
    }
}

impl PreferencesStore for FilePreferencesStore {
    fn load_pref(&self, key: &str) -> Result<Option<String>, StoreError> {
        validate_key(key)?;
        let map = load_pref_map(&self.file)?;
        Ok(map.get(key).cloned())
    }

    fn save_pref(&self, key: &str, value: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut map = load_pref_map(&self.file)?;
        map.insert(key.to_string(), value.to_string());
        save_pref_map(&self.file, &map)
    }

    fn delete_pref(&self, key: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut map = load_pref_map(&self.file)?;
        if map.remove(key).is_none() {
            return Ok(());
        }
        save_pref_map(&self.file, &map)
    }
}
