use async_trait::async_trait;

use crate::domain::{JobRecord, RequestFingerprint};

/// Durable fingerprint -> result memo. Only success-terminal records are
/// ever stored; a failed request must stay retryable under the same key.
#[async_trait]
pub trait ResultCache: Send + Sync {
    /// Pure read, no side effects.
    async fn lookup(
        &self,
        fingerprint: &RequestFingerprint,
    ) -> Result<Option<JobRecord>, CacheError>;

    /// Persists the record durably before returning. Last write wins on
    /// duplicate keys.
    async fn store(
        &self,
        fingerprint: &RequestFingerprint,
        record: &JobRecord,
    ) -> Result<(), CacheError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache io: {0}")]
    Io(#[from] std::io::Error),
    #[error("cache serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}
