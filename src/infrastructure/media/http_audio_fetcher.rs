use std::path::Path;

use async_trait::async_trait;
use futures::StreamExt;
use tokio::io::AsyncWriteExt;

use crate::application::ports::{AudioFetcher, DownloadError};

/// Streams the audio asset straight to disk without buffering the whole
/// body. A failed transfer removes the partial file.
pub struct HttpAudioFetcher {
    client: reqwest::Client,
}

impl HttpAudioFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpAudioFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioFetcher for HttpAudioFetcher {
    async fn download(&self, url: &str, dest: &Path) -> Result<u64, DownloadError> {
        if url.is_empty() {
            return Err(DownloadError::InvalidUrl);
        }

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DownloadError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DownloadError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let mut file = tokio::fs::File::create(dest).await?;
        let mut stream = response.bytes_stream();
        let mut total: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let bytes = match chunk {
                Ok(b) => b,
                Err(e) => {
                    drop(file);
                    let _ = tokio::fs::remove_file(dest).await;
                    return Err(DownloadError::RequestFailed(e.to_string()));
                }
            };
            total += bytes.len() as u64;
            if let Err(e) = file.write_all(&bytes).await {
                drop(file);
                let _ = tokio::fs::remove_file(dest).await;
                return Err(DownloadError::Io(e));
            }
        }

        if let Err(e) = file.flush().await {
            drop(file);
            let _ = tokio::fs::remove_file(dest).await;
            return Err(DownloadError::Io(e));
        }

        Ok(total)
    }
}
