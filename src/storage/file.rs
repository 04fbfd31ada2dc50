//! File-backed key-value store
//!
//! Each key maps to `<dir>/<encoded-key>.json`. Bytes outside
//! `[A-Za-z0-9_-]` are percent-encoded, so `market:cartproducts` is stored
//! as `market%3Acartproducts.json` and distinct keys never share a file.

use crate::error::{CartError, CartResult};
use crate::storage::KeyValueStore;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Key-value store that keeps one file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the value files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn key_path(&self, key: &str) -> CartResult<PathBuf> {
        if key.is_empty() {
            return Err(CartError::InvalidKey(key.to_string()));
        }

        let mut encoded = String::with_capacity(key.len());
        for byte in key.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-' {
                encoded.push(char::from(byte));
            } else {
                encoded.push_str(&format!("%{:02X}", byte));
            }
        }

        Ok(self.dir.join(format!("{}.json", encoded)))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> CartResult<Option<String>> {
        let path = self.key_path(key)?;

        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| CartError::io(format!("reading {}", path.display()), e))?;

        debug!("Read {} bytes from {}", content.len(), path.display());
        Ok(Some(content))
    }

    async fn set(&self, key: &str, value: &str) -> CartResult<()> {
        let path = self.key_path(key)?;

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| CartError::io(format!("creating {}", self.dir.display()), e))?;

        fs::write(&path, value)
            .await
            .map_err(|e| CartError::io(format!("writing {}", path.display()), e))?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> CartResult<()> {
        let path = self.key_path(key)?;
        if path.exists() {
            fs::remove_file(&path)
                .await
                .map_err(|e| CartError::io(format!("removing {}", path.display()), e))?;
        }
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
