use std::path::Path;

use async_trait::async_trait;

/// Format-conversion capability. The concrete tool is swappable so the
/// pipeline can be exercised with a fake in tests.
#[async_trait]
pub trait Transcoder: Send + Sync {
    /// Produces `target` from `source`. Must either complete the target
    /// file or leave nothing observable at that path.
    async fn transcode(&self, source: &Path, target: &Path) -> Result<(), TranscodeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    #[error("transcoder unavailable: {0}")]
    Unavailable(String),
    #[error("transcode failed: {0}")]
    Failed(String),
    #[error("transcode io: {0}")]
    Io(#[from] std::io::Error),
}
