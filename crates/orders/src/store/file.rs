//! JSON file store backend.
//!
//! The whole store lives in one JSON document shaped like [`Tables`]. Nothing
//! is cached between calls. Every mutation takes an exclusive lock on a
//! sidecar `<file>.lock`, re-reads the document under that lock, applies the
//! change and writes it to a temp file in the same directory that is renamed
//! over the data file before the lock is released. Any number of handles and
//! processes may share one file; their read-modify-write cycles never
//! interleave.
//!
//! Reads take no lock: the rename makes each write visible all at once.

use super::{RecordStore, StoreError, Tables, Transition};
use crate::model::{Food, Order, OrderStatus};
use fs2::FileExt;
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// File-backed record store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    lock_path: PathBuf,
    create_if_missing: bool,
}

/// Exclusive lock on the sidecar file, released on drop.
struct FileLock(File);

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.0);
    }
}

impl JsonFileStore {
    /// Open an existing store file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Self::load(path.into(), false)
    }

    /// Open a store file, starting empty if it does not exist yet. The file
    /// is only created on the first write.
    pub fn open_or_create(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Self::load(path.into(), true)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: PathBuf, create_if_missing: bool) -> Result<Self, StoreError> {
        let mut lock_path = OsString::from(path.as_os_str());
        lock_path.push(".lock");

        let store = Self {
            lock_path: PathBuf::from(lock_path),
            path,
            create_if_missing,
        };

        // Fail at open on a missing or malformed file
        let tables = store.read_tables()?;
        tracing::debug!(
            path = %store.path.display(),
            foods = tables.foods.len(),
            orders = tables.orders.len(),
            "Record store opened"
        );

        Ok(store)
    }

    fn read_tables(&self) -> Result<Tables, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => {
                let tables: Tables = serde_json::from_slice(&bytes)?;
                tables.check()?;
                Ok(tables)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound && self.create_if_missing => Ok(Tables::default()),
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn lock(&self) -> Result<FileLock, StoreError> {
        let io_err = |source: io::Error| StoreError::Io {
            path: self.lock_path.clone(),
            source,
        };

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&self.lock_path)
            .map_err(io_err)?;
        FileExt::lock_exclusive(&file).map_err(io_err)?;
        Ok(FileLock(file))
    }

    /// Apply `f` to the current file contents and persist when the orders
    /// changed, all under the exclusive lock.
    fn mutate<R>(&self, f: impl FnOnce(&mut Tables) -> R) -> Result<R, StoreError> {
        let _lock = self.lock()?;
        let mut tables = self.read_tables()?;
        let before = tables.orders.clone();
        let result = f(&mut tables);

        if tables.orders != before {
            if let Err(e) = self.persist(&tables) {
                tracing::error!(path = %self.path.display(), error = %e, "Failed to persist record store");
                return Err(e);
            }
        }

        Ok(result)
    }

    fn persist(&self, tables: &Tables) -> Result<(), StoreError> {
        let io_err = |source: io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let bytes = serde_json::to_vec_pretty(tables)?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
        tmp.write_all(&bytes).map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(&self.path).map_err(|e| io_err(e.error))?;
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn list_foods(&self) -> Result<Vec<Food>, StoreError> {
        Ok(self.read_tables()?.foods)
    }

    fn order(&self, order_id: i64) -> Result<Option<Order>, StoreError> {
        Ok(self.read_tables()?.order(order_id).cloned())
    }

    fn set_order_status(&self, order_id: i64, status: OrderStatus) -> Result<bool, StoreError> {
        self.mutate(|tables| tables.set_status(order_id, status))
    }

    fn set_order_comment(&self, order_id: i64, comment: &str) -> Result<bool, StoreError> {
        self.mutate(|tables| tables.set_comment(order_id, comment))
    }

    fn transition_order_status(
        &self,
        order_id: i64,
        owner_phone: Option<&str>,
        from: &OrderStatus,
        to: OrderStatus,
    ) -> Result<Transition, StoreError> {
        self.mutate(|tables| tables.transition(order_id, owner_phone, from, to))
    }
}
