//! JSON file-backed usage store

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::DomainError;
use crate::domain::usage::{UsageMap, UsageStore};

/// Whole-map JSON store at a fixed path
///
/// A missing file is an empty map; a corrupt file is a storage error (the
/// ledger decides what to do with that). Every persist rewrites the file
/// wholesale, creating the data directory on demand.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl UsageStore for JsonFileStore {
    async fn load(&self) -> Result<UsageMap, DomainError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(UsageMap::new());
            }
            Err(error) => {
                return Err(DomainError::storage(format!(
                    "failed to read {}: {error}",
                    self.path.display()
                )));
            }
        };

        serde_json::from_str(&raw).map_err(|error| {
            DomainError::storage(format!("corrupt usage file {}: {error}", self.path.display()))
        })
    }

    async fn persist(&self, usage: &UsageMap) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|error| {
                DomainError::storage(format!(
                    "failed to create {}: {error}",
                    parent.display()
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(usage)
            .map_err(|error| DomainError::storage(format!("failed to encode usage: {error}")))?;

        tokio::fs::write(&self.path, json).await.map_err(|error| {
            DomainError::storage(format!(
                "failed to write {}: {error}",
                self.path.display()
            ))
        })
    }
}
