//! Shared snapshot cache for the composed preview document.
//!
//! The latest combined document is written under a fixed key in a small
//! JSON file in the user cache directory. A separate consumer view reads
//! the same key on its own schedule; there is no notification mechanism.
//! Each publish overwrites the previous snapshot - no history is kept.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::compose::RenderTarget;
use crate::error::{Error, Result};

/// Fixed key under which the latest composed document is stored.
pub const SNAPSHOT_KEY: &str = "livepen.preview";

const SNAPSHOT_FILE: &str = "snapshot.json";

/// Fixed-key store over a JSON file in the cache directory.
pub struct SnapshotStore {
    path: Option<PathBuf>,
}

impl SnapshotStore {
    /// Store at the default location, `<cache_dir>/livepen/snapshot.json`.
    ///
    /// If no cache directory can be resolved, publishing becomes a logged
    /// no-op rather than an error surfaced to the user.
    pub fn new() -> Self {
        Self {
            path: dirs::cache_dir().map(|p| p.join("livepen").join(SNAPSHOT_FILE)),
        }
    }

    /// Store backed by an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// The backing file, if one could be resolved.
    pub fn path(&self) -> Option<&std::path::Path> {
        self.path.as_deref()
    }

    /// Overwrite the snapshot with the latest document.
    pub fn publish(&self, doc: &str) -> Result<()> {
        let Some(path) = &self.path else {
            return Err(Error::NoCacheDir);
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        // The whole map is rewritten each time so stale keys never linger.
        let mut map = BTreeMap::new();
        map.insert(SNAPSHOT_KEY.to_string(), doc.to_string());
        let content = serde_json::to_string_pretty(&map)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Read the latest published document, if any.
    pub fn load(&self) -> Option<String> {
        self.path
            .as_ref()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|content| {
                serde_json::from_str::<BTreeMap<String, String>>(&content).ok()
            })
            .and_then(|mut map| map.remove(SNAPSHOT_KEY))
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTarget for SnapshotStore {
    fn set_source(&self, doc: &str) {
        if let Err(e) = self.publish(doc) {
            tracing::warn!("failed to publish preview snapshot: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn publish_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::at_path(dir.path().join("snapshot.json"));

        assert_eq!(store.load(), None);
        store.publish("<html>one</html>").unwrap();
        assert_eq!(store.load(), Some("<html>one</html>".to_string()));
    }

    #[test]
    fn publish_overwrites_without_history() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::at_path(dir.path().join("snapshot.json"));

        store.publish("first").unwrap();
        store.publish("second").unwrap();

        assert_eq!(store.load(), Some("second".to_string()));
        // The file holds exactly the one fixed key.
        let raw = fs::read_to_string(store.path().unwrap()).unwrap();
        let map: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(map.len(), 1);
        assert!(map.contains_key(SNAPSHOT_KEY));
    }

    #[test]
    fn missing_parent_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::at_path(dir.path().join("nested").join("snapshot.json"));
        store.publish("doc").unwrap();
        assert_eq!(store.load(), Some("doc".to_string()));
    }
}
