use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{TranscodeError, Transcoder};

/// Shells out to ffmpeg for the wav-to-mp3 conversion. Output goes to a
/// temp path in the target directory and is renamed into place, so a
/// failed run never leaves a half-written file at the target path.
pub struct FfmpegTranscoder {
    program: String,
}

impl FfmpegTranscoder {
    pub fn new(program: String) -> Self {
        Self { program }
    }
}

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    async fn transcode(&self, source: &Path, target: &Path) -> Result<(), TranscodeError> {
        let tmp = target.with_extension("mp3.tmp");

        let output = Command::new(&self.program)
            .arg("-y")
            .arg("-i")
            .arg(source)
            // the temp suffix defeats extension sniffing, so be explicit
            .arg("-f")
            .arg("mp3")
            .arg(&tmp)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| TranscodeError::Unavailable(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(TranscodeError::Failed(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        tokio::fs::rename(&tmp, target).await?;
        tracing::debug!(
            source = %source.display(),
            target = %target.display(),
            "Transcode finished"
        );
        Ok(())
    }
}
