use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

const PREFS_FILE: &str = "prefs.json";
const IGNORE_VERSION_KEY: &str = "ignore_version";

/// Minimal persisted key-value region scoped to the installation.
///
/// Implementations serialize their own reads and writes; a single string key
/// with a single writer is all this crate needs. Values survive process
/// restarts and disappear only when the host clears its data.
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// [`PrefStore`] backed by a small JSON object file under the host's data
/// directory.
#[derive(Clone)]
pub struct FilePrefStore {
    path: PathBuf,
}

impl FilePrefStore {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            path: base_dir.as_ref().join(PREFS_FILE),
        }
    }

    fn read_all(&self) -> HashMap<String, String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
                warn!("prefs: ignoring unreadable {}: {err}", self.path.display());
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        }
    }
}

impl PrefStore for FilePrefStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let mut entries = self.read_all();
        entries.insert(key.to_owned(), value.to_owned());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| format!("unable to create prefs dir: {e}"))?;
        }
        let contents =
            serde_json::to_string(&entries).map_err(|e| format!("prefs encode error: {e}"))?;
        fs::write(&self.path, contents).map_err(|e| format!("unable to persist prefs: {e}"))
    }
}

/// Tracks the single most recently dismissed update version.
///
/// Each save overwrites the previous record; no history is kept and the record
/// is never deleted by this module.
pub struct IgnoredVersionStore<S> {
    store: S,
}

impl<S: PrefStore> IgnoredVersionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist `version` as the dismissed version, replacing any prior value.
    pub fn save(&self, version: &str) -> Result<(), String> {
        debug!("recording dismissed version {version}");
        self.store.set(IGNORE_VERSION_KEY, version)
    }

    /// Whether `version` exactly matches the persisted record. String
    /// equality only; before the first save the record reads as empty.
    #[must_use]
    pub fn is_ignored(&self, version: &str) -> bool {
        self.store.get(IGNORE_VERSION_KEY).unwrap_or_default() == version
    }
}
