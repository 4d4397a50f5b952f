use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::application::ports::{CacheError, ContentClient, ContentClientError, ResultCache};
use crate::application::services::{MaterializeError, Materializer};
use crate::domain::{ContentRequest, JobRecord, RequestFingerprint, StatusSnapshot, Terminality};

/// Bounds for the wait-until-terminal loop. The interval doubles after
/// each poll up to `max_interval`; `deadline` caps the total wait.
#[derive(Debug, Clone)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_interval: Duration,
    pub deadline: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            max_interval: Duration::from_secs(60),
            deadline: Duration::from_secs(600),
        }
    }
}

/// Orchestrates one request end to end: fingerprint, cache lookup,
/// submission, wait-to-terminal, materialization, cache write. Failures
/// are surfaced to the caller and never cached, so an identical retry
/// submits a fresh remote job.
pub struct ContentService<C> {
    client: Arc<C>,
    cache: Arc<dyn ResultCache>,
    materializer: Arc<Materializer>,
    poll_policy: PollPolicy,
    in_flight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<C: ContentClient> ContentService<C> {
    pub fn new(
        client: Arc<C>,
        cache: Arc<dyn ResultCache>,
        materializer: Arc<Materializer>,
        poll_policy: PollPolicy,
    ) -> Self {
        Self {
            client,
            cache,
            materializer,
            poll_policy,
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Runs the full pipeline for one request. A cache hit returns with
    /// zero remote calls; concurrent identical requests share one remote
    /// job through the per-fingerprint guard.
    #[tracing::instrument(skip(self, request), fields(output_type = ?request.output_type))]
    pub async fn create_content(
        &self,
        request: &ContentRequest,
    ) -> Result<JobRecord, ContentError> {
        let fingerprint = RequestFingerprint::compute(request)?;

        if let Some(record) = self.cache.lookup(&fingerprint).await? {
            tracing::info!(request_id = %record.request_id, "Cache hit, skipping remote pipeline");
            return Ok(record);
        }

        let guard = self.fingerprint_guard(&fingerprint).await;
        let _held = guard.lock().await;

        // A concurrent identical request may have completed while we
        // waited on the guard.
        if let Some(record) = self.cache.lookup(&fingerprint).await? {
            tracing::info!(request_id = %record.request_id, "Cache hit after in-flight wait");
            return Ok(record);
        }

        let receipt = self.client.submit(request).await?;
        tracing::info!(request_id = %receipt.request_id, "Job submitted");

        let snapshot = self.wait_for_terminal(&receipt.request_id).await?;
        let record = self.materialize(&receipt.request_id, snapshot).await?;

        self.cache.store(&fingerprint, &record).await?;
        Ok(record)
    }

    /// One status poll, no looping. Talks straight to the remote service,
    /// so it also works for ids created by earlier process runs.
    pub async fn status(&self, request_id: &str) -> Result<StatusSnapshot, ContentError> {
        Ok(self.client.fetch_status(request_id).await?)
    }

    async fn fingerprint_guard(&self, fingerprint: &RequestFingerprint) -> Arc<Mutex<()>> {
        let mut map = self.in_flight.lock().await;
        Arc::clone(map.entry(fingerprint.as_str().to_string()).or_default())
    }

    async fn wait_for_terminal(&self, request_id: &str) -> Result<StatusSnapshot, ContentError> {
        let started = Instant::now();
        let mut interval = self.poll_policy.interval;

        loop {
            let snapshot = self.client.fetch_status(request_id).await?;
            match snapshot.classify() {
                Terminality::Failed { message } => {
                    tracing::warn!(request_id, error = %message, "Remote job failed");
                    return Err(ContentError::RemoteJob(message));
                }
                Terminality::Pending { status } => {
                    tracing::debug!(request_id, status, "Job in progress");
                }
                _ => return Ok(snapshot),
            }

            if started.elapsed() + interval > self.poll_policy.deadline {
                return Err(ContentError::Timeout {
                    waited: started.elapsed(),
                });
            }
            tokio::time::sleep(interval).await;
            interval = (interval * 2).min(self.poll_policy.max_interval);
        }
    }

    async fn materialize(
        &self,
        request_id: &str,
        snapshot: StatusSnapshot,
    ) -> Result<JobRecord, ContentError> {
        match snapshot.classify() {
            Terminality::SucceededText { body } => {
                let path = self.materializer.write_study_guide(request_id, &body).await?;
                Ok(JobRecord {
                    request_id: request_id.to_string(),
                    status: 100,
                    audio_url: None,
                    audio_title: None,
                    file_path: Some(path.display().to_string()),
                    error_message: None,
                })
            }
            Terminality::SucceededAudio { url, title } => {
                let (wav_path, _mp3_path) =
                    self.materializer.materialize_audio(&url, &title).await?;
                Ok(JobRecord {
                    request_id: request_id.to_string(),
                    status: 100,
                    audio_url: Some(url),
                    audio_title: Some(title),
                    file_path: Some(wav_path.display().to_string()),
                    error_message: None,
                })
            }
            // wait_for_terminal only hands over successful snapshots
            Terminality::Failed { message } => Err(ContentError::RemoteJob(message)),
            Terminality::Pending { status } => Err(ContentError::RemoteJob(format!(
                "non-terminal status {status} reached materialization"
            ))),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("remote service: {0}")]
    RemoteService(#[from] ContentClientError),
    #[error("remote job failed: {0}")]
    RemoteJob(String),
    #[error("{0}")]
    Materialize(#[from] MaterializeError),
    #[error("cache: {0}")]
    Cache(#[from] CacheError),
    #[error("request serialization: {0}")]
    Fingerprint(#[from] serde_json::Error),
    #[error("timed out after {}s waiting for job completion", waited.as_secs())]
    Timeout { waited: Duration },
}
