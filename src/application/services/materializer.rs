use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use crate::application::ports::{AudioFetcher, DownloadError, TranscodeError, Transcoder};

/// Wrap width for study-guide plain text, matching the remote service's
/// rendering expectations.
const STUDY_GUIDE_WRAP_WIDTH: usize = 130;

/// Where materialized artifacts live on disk. Directories are created on
/// demand, never at startup.
#[derive(Debug, Clone)]
pub struct ArtifactLayout {
    pub podcasts_dir: PathBuf,
    pub mp3_dir: PathBuf,
    pub study_guides_dir: PathBuf,
}

/// A listed artifact: bare file name plus its location on disk.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactEntry {
    pub name: String,
    pub path: String,
}

/// Turns terminal remote results into local artifacts: downloaded wav
/// plus mp3 delivery copy on the audio path, plain-text study guide on
/// the text path. Artifacts are written once and never mutated; only
/// re-running the mp3 conversion is a supported repeat operation.
pub struct Materializer {
    fetcher: Arc<dyn AudioFetcher>,
    transcoder: Arc<dyn Transcoder>,
    layout: ArtifactLayout,
}

impl Materializer {
    pub fn new(
        fetcher: Arc<dyn AudioFetcher>,
        transcoder: Arc<dyn Transcoder>,
        layout: ArtifactLayout,
    ) -> Self {
        Self {
            fetcher,
            transcoder,
            layout,
        }
    }

    /// Converts a rich-text job body to plain text and writes it under the
    /// study-guides directory, named by request id.
    pub async fn write_study_guide(
        &self,
        request_id: &str,
        html: &str,
    ) -> Result<PathBuf, MaterializeError> {
        let plain = html2text::from_read(html.as_bytes(), STUDY_GUIDE_WRAP_WIDTH);

        tokio::fs::create_dir_all(&self.layout.study_guides_dir).await?;
        let path = self
            .layout
            .study_guides_dir
            .join(format!("{request_id}.txt"));
        tokio::fs::write(&path, plain).await?;

        tracing::info!(path = %path.display(), "Study guide written");
        Ok(path)
    }

    /// Downloads the audio asset and produces the mp3 delivery copy.
    /// The wav survives a failed transcode; the mp3 is all-or-nothing.
    pub async fn materialize_audio(
        &self,
        url: &str,
        title: &str,
    ) -> Result<(PathBuf, PathBuf), MaterializeError> {
        if url.is_empty() {
            return Err(MaterializeError::Download(DownloadError::InvalidUrl));
        }

        tokio::fs::create_dir_all(&self.layout.podcasts_dir).await?;
        let file_name = sanitize_title(title);
        let wav_path = self.layout.podcasts_dir.join(format!("{file_name}.wav"));

        let bytes = self.fetcher.download(url, &wav_path).await?;
        tracing::info!(bytes, path = %wav_path.display(), "Audio downloaded");

        let mp3_path = self.transcode_to_mp3(&wav_path).await?;
        Ok((wav_path, mp3_path))
    }

    /// Re-runs delivery-format conversion for an already-downloaded file.
    /// `relative` is resolved against the podcasts directory; used to
    /// backfill mp3s for wavs downloaded in earlier runs.
    pub async fn convert_existing(&self, relative: &str) -> Result<PathBuf, MaterializeError> {
        let name = checked_file_name(relative)?;
        let source = self.layout.podcasts_dir.join(name);
        if !tokio::fs::try_exists(&source).await? {
            return Err(MaterializeError::MissingSource(source));
        }
        self.transcode_to_mp3(&source).await
    }

    async fn transcode_to_mp3(&self, source: &Path) -> Result<PathBuf, MaterializeError> {
        tokio::fs::create_dir_all(&self.layout.mp3_dir).await?;
        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        let target = self.layout.mp3_dir.join(format!("{stem}.mp3"));

        self.transcoder.transcode(source, &target).await?;
        tracing::info!(path = %target.display(), "Delivery format written");
        Ok(target)
    }

    pub async fn list_podcasts(&self) -> Result<Vec<ArtifactEntry>, MaterializeError> {
        self.list_dir(&self.layout.podcasts_dir).await
    }

    pub async fn list_study_guides(&self) -> Result<Vec<ArtifactEntry>, MaterializeError> {
        self.list_dir(&self.layout.study_guides_dir).await
    }

    pub async fn read_study_guide(&self, name: &str) -> Result<String, MaterializeError> {
        let name = checked_file_name(name)?;
        let path = self.layout.study_guides_dir.join(name);
        Ok(tokio::fs::read_to_string(path).await?)
    }

    /// On-disk location of a stored wav, for static serving.
    pub fn podcast_path(&self, name: &str) -> Result<PathBuf, MaterializeError> {
        checked_file_name(name).map(|n| self.layout.podcasts_dir.join(n))
    }

    /// On-disk location of a stored mp3, for static serving.
    pub fn mp3_path(&self, name: &str) -> Result<PathBuf, MaterializeError> {
        checked_file_name(name).map(|n| self.layout.mp3_dir.join(n))
    }

    async fn list_dir(&self, dir: &Path) -> Result<Vec<ArtifactEntry>, MaterializeError> {
        if !tokio::fs::try_exists(dir).await? {
            return Ok(Vec::new());
        }

        let mut entries = tokio::fs::read_dir(dir).await?;
        let mut out = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                out.push(ArtifactEntry {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    path: entry.path().display().to_string(),
                });
            }
        }
        out.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(out)
    }
}

/// Rejects names that would resolve outside the artifact directories.
fn checked_file_name(name: &str) -> Result<&str, MaterializeError> {
    if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(MaterializeError::InvalidName(name.to_string()));
    }
    Ok(name)
}

/// Audio titles come from the remote service verbatim; strip anything the
/// filesystem would interpret as path structure.
fn sanitize_title(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| {
            if matches!(c, '/' | '\\' | ':' | '\0') {
                '_'
            } else {
                c
            }
        })
        .collect();
    if cleaned.is_empty() {
        "untitled".to_string()
    } else {
        cleaned
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MaterializeError {
    #[error("download: {0}")]
    Download(#[from] DownloadError),
    #[error("transcode: {0}")]
    Transcode(#[from] TranscodeError),
    #[error("source file not found: {}", .0.display())]
    MissingSource(PathBuf),
    #[error("invalid artifact name: {0}")]
    InvalidName(String),
    #[error("artifact io: {0}")]
    Io(#[from] std::io::Error),
}
