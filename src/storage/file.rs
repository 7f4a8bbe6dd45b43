//! JSON-file backed store.
//!
//! The file holds one JSON object mapping string keys to string values.
//! Reads take a shared lock, writes take an exclusive lock and re-read the
//! file before writing so that slots written by another process survive.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::{KeyValueStore, StoreError};

type Slots = BTreeMap<String, String>;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Bind a store to `path`. Nothing is touched on disk until first access.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/pokeinfo/storage.json`, or the current directory when the
    /// platform has no data directory.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("pokeinfo").join("storage.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_slots(&self, file: &mut File) -> Result<Slots, StoreError> {
        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| self.io_error(e))?;

        if content.trim().is_empty() {
            return Ok(Slots::new());
        }

        serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        FileExt::lock_shared(&file).map_err(|e| self.io_error(e))?;
        let slots = self.read_slots(&mut file);
        FileExt::unlock(&file).map_err(|e| self.io_error(e))?;

        Ok(slots?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;

        FileExt::lock_exclusive(&file).map_err(|e| self.io_error(e))?;

        let mut slots = self.read_slots(&mut file)?;
        slots.insert(key.to_string(), value.to_string());

        let body = serde_json::to_string_pretty(&slots).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            source: e,
        })?;

        file.set_len(0).map_err(|e| self.io_error(e))?;
        file.seek(SeekFrom::Start(0))
            .map_err(|e| self.io_error(e))?;
        file.write_all(body.as_bytes())
            .map_err(|e| self.io_error(e))?;
        file.sync_all().map_err(|e| self.io_error(e))?;

        FileExt::unlock(&file).map_err(|e| self.io_error(e))?;

        tracing::debug!(path = %self.path.display(), key, "Store slot written");
        Ok(())
    }
}
