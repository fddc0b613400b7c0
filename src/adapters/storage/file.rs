//! File storage backend
//!
//! Keeps an ordered map in memory and mirrors it to a single JSON document.
//! Every mutation rewrites the document through a sibling temp file followed
//! by a rename, so a crash leaves either the old or the new document on disk.

use crate::adapters::storage::traits::{CapacityLimits, PatientStorage};
use crate::domain::{Patient, Result, StorageError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Durable patient map backed by a JSON file
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    records: BTreeMap<String, Patient>,
    limits: CapacityLimits,
}

impl FileStorage {
    /// Open the store at `path`, loading any existing document
    ///
    /// A missing file is an empty store; the parent directory is created on
    /// first write.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ReadFailed`] if the file exists but cannot be
    /// read, and [`StorageError::Corrupted`] if it cannot be decoded or a
    /// record is filed under a key other than its own id.
    pub async fn open(path: impl AsRef<Path>, limits: CapacityLimits) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let records = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => BTreeMap::new(),
            Ok(bytes) => Self::decode(&path, &bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(StorageError::ReadFailed(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                ))
                .into())
            }
        };

        tracing::debug!(
            path = %path.display(),
            records = records.len(),
            "Opened file storage"
        );

        Ok(Self {
            path,
            records,
            limits,
        })
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn decode(path: &Path, bytes: &[u8]) -> Result<BTreeMap<String, Patient>> {
        let records: BTreeMap<String, Patient> = serde_json::from_slice(bytes).map_err(|e| {
            StorageError::Corrupted(format!("Failed to decode {}: {}", path.display(), e))
        })?;

        if let Some((key, record)) = records.iter().find(|(k, r)| k.as_str() != r.id.as_str()) {
            return Err(StorageError::Corrupted(format!(
                "Record {} is stored under key {}",
                record.id, key
            ))
            .into());
        }

        Ok(records)
    }

    /// Write the current map to disk
    async fn persist(&self) -> Result<()> {
        let encoded = serde_json::to_vec_pretty(&self.records)
            .map_err(|e| StorageError::WriteFailed(format!("Failed to encode store: {e}")))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::WriteFailed(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let tmp_path = self.temp_path();
        tokio::fs::write(&tmp_path, &encoded).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write {}: {}", tmp_path.display(), e))
        })?;
        if let Err(e) = tokio::fs::rename(&tmp_path, &self.path).await {
            // Best effort; the rename error is the one worth reporting
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(StorageError::WriteFailed(format!(
                "Failed to replace {}: {}",
                self.path.display(),
                e
            ))
            .into());
        }

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl PatientStorage for FileStorage {
    fn backend_name(&self) -> &str {
        "file"
    }

    async fn get(&self, key: &str) -> Result<Option<Patient>> {
        Ok(self.records.get(key).cloned())
    }

    async fn insert(&mut self, key: &str, record: Patient) -> Result<()> {
        self.limits.check(key, &record)?;

        let previous = self.records.insert(key.to_string(), record);
        if let Err(e) = self.persist().await {
            // Keep memory in step with what is on disk
            match previous {
                Some(old) => {
                    self.records.insert(key.to_string(), old);
                }
                None => {
                    self.records.remove(key);
                }
            }
            return Err(e);
        }

        Ok(())
    }

    async fn remove(&mut self, key: &str) -> Result<Option<Patient>> {
        let Some(removed) = self.records.remove(key) else {
            return Ok(None);
        };

        if let Err(e) = self.persist().await {
            self.records.insert(key.to_string(), removed);
            return Err(e);
        }

        Ok(Some(removed))
    }

    async fn values(&self) -> Result<Vec<Patient>> {
        Ok(self.records.values().cloned().collect())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.records.len())
    }
}
