use std::path::Path;

use async_trait::async_trait;

/// Streams a remote audio asset to a local file. Implementations must not
/// leave a partial file at `dest` on failure.
#[async_trait]
pub trait AudioFetcher: Send + Sync {
    /// Returns the number of bytes written.
    async fn download(&self, url: &str, dest: &Path) -> Result<u64, DownloadError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("invalid audio url")]
    InvalidUrl,
    #[error("download request failed: {0}")]
    RequestFailed(String),
    #[error("download io: {0}")]
    Io(#[from] std::io::Error),
}
