//! Memory store wrapped with a JSON snapshot file.
//!
//! Durability is best-effort: the snapshot is rewritten after every
//! successful mutation and read once at open. A missing or empty file
//! opens an empty store; a corrupt file is an open error.

use std::fmt::Display;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use super::{ItemStore, MemoryStore, StoreError};
use crate::entities::Item;

#[derive(Serialize, Deserialize)]
struct Snapshot {
    next_id: i64,
    items: Vec<Item>,
}

/// File-backed store delegating all reads and the in-memory half of
/// all writes to [`MemoryStore`].
#[derive(Debug)]
pub struct SnapshotStore {
    inner: MemoryStore,
    path: PathBuf,
}

impl SnapshotStore {
    /// Opens the snapshot at `path`, creating parent directories as
    /// needed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| snapshot_error(&path, e))?;
        }
        let inner = match fs::read(&path) {
            Ok(bytes) if bytes.is_empty() => MemoryStore::new(),
            Ok(bytes) => {
                let snap: Snapshot =
                    serde_json::from_slice(&bytes).map_err(|e| snapshot_error(&path, e))?;
                debug!("loaded {} items from {}", snap.items.len(), path.display());
                MemoryStore::restore(snap.next_id, snap.items)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => MemoryStore::new(),
            Err(e) => return Err(snapshot_error(&path, e)),
        };
        Ok(Self { inner, path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        let (next_id, items) = self.inner.dump();
        let snap = Snapshot {
            next_id,
            items: items.to_vec(),
        };
        let bytes = serde_json::to_vec_pretty(&snap).map_err(|e| snapshot_error(&self.path, e))?;
        fs::write(&self.path, bytes).map_err(|e| snapshot_error(&self.path, e))
    }
}

fn snapshot_error(path: &Path, reason: impl Display) -> StoreError {
    StoreError::Snapshot {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

impl ItemStore for SnapshotStore {
    fn save(&mut self, item: &Item) -> Result<i64, StoreError> {
        let id = self.inner.save(item)?;
        self.persist()?;
        Ok(id)
    }

    fn item_by_id(&self, id: i64) -> Result<Item, StoreError> {
        self.inner.item_by_id(id)
    }

    fn items_by_parent(&self, parent_id: i64) -> Result<Vec<Item>, StoreError> {
        self.inner.items_by_parent(parent_id)
    }

    fn increase_order_after(&mut self, item: &Item) -> Result<(), StoreError> {
        self.inner.increase_order_after(item)?;
        self.persist()
    }
}
