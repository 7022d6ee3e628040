//! File-backed Key-Value Storage
//!
//! One JSON object per namespace at `<dir>/<namespace>.json`. Every write
//! replaces the whole document through a temp file and a rename, so a
//! reader never sees a half-written file.

use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::storage::{KeyValueStorage, StorageError, StorageResult};

type Document = BTreeMap<String, String>;

/// JSON file storage
#[derive(Debug)]
pub struct FileStorage {
    namespace: String,
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl FileStorage {
    /// Open storage for `namespace` under `dir`, creating `dir` if needed
    ///
    /// The file itself is created on first write.
    pub fn open(dir: impl AsRef<Path>, namespace: impl Into<String>) -> StorageResult<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let namespace = namespace.into();
        let path = dir.join(format!("{namespace}.json"));

        tracing::debug!(path = %path.display(), "Opened file storage");

        Ok(Self {
            namespace,
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> StorageResult<Document> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Document::new()),
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(Document::new());
        }

        serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt(e.to_string()))
    }

    fn write_document(&self, doc: &Document) -> StorageResult<()> {
        let encoded = serde_json::to_vec_pretty(doc)?;
        let tmp_path = self.path.with_extension("json.tmp");

        {
            let mut file = open_private(&tmp_path)?;
            file.write_all(&encoded)?;
            file.sync_all()?;
        }

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Read-modify-write; a corrupt document is replaced rather than kept
    fn modify(&self, f: impl FnOnce(&mut Document)) -> StorageResult<()> {
        let _guard = self.write_lock.lock();

        let mut doc = match self.read_document() {
            Ok(doc) => doc,
            Err(StorageError::Corrupt(reason)) => {
                tracing::warn!(path = %self.path.display(), %reason, "Discarding corrupt storage file");
                Document::new()
            }
            Err(e) => return Err(e),
        };

        f(&mut doc);
        self.write_document(&doc)
    }
}

#[cfg(unix)]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;

    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

impl KeyValueStorage for FileStorage {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.read_document()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.modify(|doc| {
            doc.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.modify(|doc| {
            doc.remove(key);
        })
    }

    /// Empty the document, then delete the file
    ///
    /// Succeeds when either step leaves no values behind.
    fn clear(&self) -> StorageResult<()> {
        let _guard = self.write_lock.lock();
        if !self.path.exists() {
            return Ok(());
        }

        let emptied = self.write_document(&Document::new());
        if let Err(e) = &emptied {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to empty storage file");
        }

        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) if emptied.is_ok() => {
                tracing::warn!(path = %self.path.display(), error = %e, "Left an empty storage file behind");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> StorageResult<()> {
        self.modify(|doc| {
            for (key, value) in entries {
                doc.insert(key.to_string(), value.to_string());
            }
        })
    }
}
