use async_trait::async_trait;

use crate::domain::{ContentRequest, StatusSnapshot};

/// Identifier handed back by the remote service when a job is accepted.
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    pub request_id: String,
}

/// Outbound interface to the content-generation service. Each method is a
/// single call; retry policy belongs to the caller.
#[async_trait]
pub trait ContentClient: Send + Sync {
    async fn submit(
        &self,
        request: &ContentRequest,
    ) -> Result<SubmissionReceipt, ContentClientError>;

    async fn fetch_status(&self, request_id: &str) -> Result<StatusSnapshot, ContentClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ContentClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
