//! File-backed durable storage.
//!
//! Values live in a flat TOML table (`key = "value"`). Every write goes
//! through a temporary file, is fsynced, then atomically renamed over the
//! original while an exclusive lock file is held.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use wisen_core::WisenError;
use wisen_core::error::Result;
use wisen_core::storage::DurableStorage;

type Table = BTreeMap<String, String>;

/// Durable storage kept in a single TOML file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole table. A missing or blank file is an empty table.
    fn read_table(&self) -> Result<Table> {
        if !self.path.exists() {
            return Ok(Table::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Table::new());
        }
        Ok(toml::from_str(&content)?)
    }

    fn write_table(&self, table: &Table) -> Result<()> {
        let serialized = toml::to_string_pretty(table)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(serialized.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Runs `f` on the current table under an exclusive lock and writes the
    /// result back when `f` reports a change.
    fn modify<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Table) -> bool,
    {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let _lock = LockGuard::acquire(&self.path)?;

        let mut table = self.read_table()?;
        if f(&mut table) {
            self.write_table(&table)?;
        }
        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| WisenError::storage("state path has no parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| WisenError::storage("state path has no file name"))?;
        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

#[async_trait]
impl DurableStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_table()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.modify(|table| {
            table.insert(key.to_string(), value.to_string());
            true
        })?;
        tracing::debug!("[Storage] Stored key '{}' in {}", key, self.path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        self.modify(|table| table.remove(key).is_some())?;
        tracing::debug!("[Storage] Removed key '{}' from {}", key, self.path.display());
        Ok(())
    }
}

/// Exclusive lock on `<path>.lock`, released and cleaned up on drop.
struct LockGuard {
    file: File,
    lock_path: PathBuf,
}

impl LockGuard {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        fs2::FileExt::lock_exclusive(&file)
            .map_err(|e| WisenError::storage(format!("Failed to acquire lock: {}", e)))?;

        Ok(Self { file, lock_path })
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.file);
        let _ = fs::remove_file(&self.lock_path);
    }
}
