//! JSON file persistence for the knowledge base

use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::defaults::default_knowledge;
use crate::error::{Error, Result};
use crate::types::KnowledgeBase;

/// Knowledge store backed by a single JSON document
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    storage_path: PathBuf,
}

impl KnowledgeStore {
    /// Create a store for the given file path. Nothing is read until [`load`](Self::load).
    pub fn new(storage_path: impl Into<PathBuf>) -> Self {
        Self {
            storage_path: storage_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    /// Whether a persisted file is present
    pub fn exists(&self) -> bool {
        self.storage_path.exists()
    }

    /// Load from disk, or return the built-in defaults if no file exists
    ///
    /// A file that exists but is unreadable or not a valid knowledge document
    /// is an error; previously taught facts are never silently replaced.
    pub fn load(&self) -> Result<KnowledgeBase> {
        if !self.storage_path.exists() {
            tracing::info!(
                "No knowledge store at {}, using built-in defaults",
                self.storage_path.display()
            );
            return Ok(default_knowledge());
        }

        let data = fs::read_to_string(&self.storage_path)
            .map_err(|e| Error::store_corrupt(&self.storage_path, e.to_string()))?;
        let kb: KnowledgeBase = serde_json::from_str(&data)
            .map_err(|e| Error::store_corrupt(&self.storage_path, e.to_string()))?;

        tracing::info!(
            "Loaded {} knowledge entries from {}",
            kb.len(),
            self.storage_path.display()
        );

        Ok(kb)
    }

    /// Save to disk, replacing the previous file atomically
    ///
    /// The document is written to a temporary file next to the target and
    /// renamed over it, so a crash mid-write leaves the old file intact.
    pub fn save(&self, kb: &KnowledgeBase) -> Result<()> {
        let data = to_pretty_json(kb)?;

        let dir = self
            .storage_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        // Ensure directory exists
        fs::create_dir_all(dir).map_err(|e| Error::store_write(&self.storage_path, e))?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .map_err(|e| Error::store_write(&self.storage_path, e))?;
        tmp.write_all(&data)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| Error::store_write(&self.storage_path, e))?;
        // Keep the existing file's mode; temp files are created owner-only
        if let Ok(existing) = fs::metadata(&self.storage_path) {
            tmp.as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| Error::store_write(&self.storage_path, e))?;
        }
        tmp.persist(&self.storage_path)
            .map_err(|e| Error::store_write(&self.storage_path, e.error))?;

        tracing::debug!(
            "Saved {} knowledge entries to {}",
            kb.len(),
            self.storage_path.display()
        );

        Ok(())
    }
}

/// Pretty JSON with 4-space indentation
fn to_pretty_json(kb: &KnowledgeBase) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    kb.serialize(&mut ser)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Answer;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> KnowledgeStore {
        KnowledgeStore::new(dir.path().join("knowledge_data.json"))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(!store.exists());
        let kb = store.load().unwrap();
        assert_eq!(kb, default_knowledge());
        // Loading alone never creates the file
        assert!(!store.exists());
    }

    #[test]
    fn test_save_then_load_is_identical() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut kb = store.load().unwrap();
        kb.insert("mortgage", "Talk to a loan officer.");
        store.save(&kb).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded, kb);
        assert!(reloaded.get("atm locations").is_some_and(Answer::is_topic));

        store.save(&reloaded).unwrap();
        assert_eq!(store.load().unwrap(), kb);
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let kb: KnowledgeBase = [("fees", "none")].into_iter().collect();

        store.save(&kb).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        assert_eq!(text, "{\n    \"fees\": \"none\"\n}");
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&default_knowledge()).unwrap();
        let small: KnowledgeBase = [("only", "one")].into_iter().collect();
        store.save(&small).unwrap();

        assert_eq!(store.load().unwrap(), small);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = KnowledgeStore::new(dir.path().join("nested").join("deeper").join("kb.json"));

        store.save(&default_knowledge()).unwrap();

        assert!(store.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_save_preserves_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&default_knowledge()).unwrap();
        fs::set_permissions(store.path(), fs::Permissions::from_mode(0o644)).unwrap();

        let mut kb = store.load().unwrap();
        kb.insert("card limit", "5000");
        store.save(&kb).unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
        assert_eq!(store.load().unwrap(), kb);
    }

    #[test]
    fn test_unparsable_file_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{ not json").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, Error::StoreCorrupt { .. }), "got {:?}", err);
    }

    #[test]
    fn test_wrong_shape_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"fees": 42}"#).unwrap();

        assert!(matches!(store.load(), Err(Error::StoreCorrupt { .. })));
    }

    #[test]
    fn test_unwritable_location_is_store_write() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "a file, not a directory").unwrap();
        let store = KnowledgeStore::new(blocker.join("kb.json"));

        let err = store.save(&default_knowledge()).unwrap_err();
        assert!(err.is_store_write(), "got {:?}", err);
    }
}
