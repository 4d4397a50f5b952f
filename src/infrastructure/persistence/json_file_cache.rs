use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::{CacheError, ResultCache};
use crate::domain::{JobRecord, RequestFingerprint};

/// Whole-file JSON cache: one object mapping fingerprint to job record.
/// Writes go through a temp file plus rename, so a reader never observes
/// a partially written cache file.
pub struct JsonFileCache {
    path: PathBuf,
    entries: Mutex<HashMap<String, JobRecord>>,
}

impl JsonFileCache {
    /// Loads the cache, tolerating a missing file. A malformed file is
    /// moved aside under a `.corrupt` suffix and the cache starts empty;
    /// previously stored records are preserved on disk, never silently
    /// deleted.
    pub async fn load(path: PathBuf) -> Result<Self, CacheError> {
        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str::<HashMap<String, JobRecord>>(&raw) {
                Ok(map) => {
                    tracing::info!(
                        path = %path.display(),
                        entries = map.len(),
                        "Result cache loaded"
                    );
                    map
                }
                Err(e) => {
                    let aside = Self::corrupt_aside_path(&path).await?;
                    tracing::warn!(
                        path = %path.display(),
                        aside = %aside.display(),
                        error = %e,
                        "Result cache unreadable, moving it aside and starting empty"
                    );
                    tokio::fs::rename(&path, &aside).await?;
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(CacheError::Io(e)),
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Picks an unused aside name, so moving a second corrupt file never
    /// overwrites the copy preserved from an earlier failure.
    async fn corrupt_aside_path(path: &Path) -> Result<PathBuf, CacheError> {
        let base = path.with_extension("json.corrupt");
        if !tokio::fs::try_exists(&base).await? {
            return Ok(base);
        }
        let mut n = 1u32;
        loop {
            let candidate = path.with_extension(format!("json.corrupt.{n}"));
            if !tokio::fs::try_exists(&candidate).await? {
                return Ok(candidate);
            }
            n += 1;
        }
    }

    async fn persist(&self, entries: &HashMap<String, JobRecord>) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let serialized = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, serialized).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl ResultCache for JsonFileCache {
    async fn lookup(
        &self,
        fingerprint: &RequestFingerprint,
    ) -> Result<Option<JobRecord>, CacheError> {
        Ok(self.entries.lock().await.get(fingerprint.as_str()).cloned())
    }

    async fn store(
        &self,
        fingerprint: &RequestFingerprint,
        record: &JobRecord,
    ) -> Result<(), CacheError> {
        let mut entries = self.entries.lock().await;
        entries.insert(fingerprint.as_str().to_string(), record.clone());
        self.persist(&entries).await?;
        tracing::info!(
            path = %self.path.display(),
            entries = entries.len(),
            "Result cache saved"
        );
        Ok(())
    }
}
