use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{ContentClient, ContentClientError, SubmissionReceipt};
use crate::domain::{ContentRequest, StatusSnapshot};

/// reqwest-backed client for the AutoContent generation API. Carries the
/// bearer credential on every call and never retries.
pub struct AutoContentClient {
    client: Client,
    base_url: String,
    token: String,
}

#[derive(Deserialize)]
struct CreateResponse {
    request_id: Option<String>,
    error_message: Option<String>,
}

impl AutoContentClient {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }
}

#[async_trait]
impl ContentClient for AutoContentClient {
    async fn submit(
        &self,
        request: &ContentRequest,
    ) -> Result<SubmissionReceipt, ContentClientError> {
        let response = self
            .client
            .post(format!("{}/Content/Create", self.base_url))
            .header("Authorization", format!("Bearer {}", self.token))
            .json(request)
            .send()
            .await
            .map_err(|e| ContentClientError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ContentClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let create: CreateResponse = response
            .json()
            .await
            .map_err(|e| ContentClientError::InvalidResponse(e.to_string()))?;

        if let Some(message) = create.error_message {
            if !message.is_empty() {
                return Err(ContentClientError::Rejected(message));
            }
        }

        match create.request_id {
            Some(id) if !id.is_empty() => Ok(SubmissionReceipt { request_id: id }),
            _ => Err(ContentClientError::InvalidResponse(
                "missing request_id".to_string(),
            )),
        }
    }

    async fn fetch_status(&self, request_id: &str) -> Result<StatusSnapshot, ContentClientError> {
        let response = self
            .client
            .get(format!("{}/content/status/{}", self.base_url, request_id))
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await
            .map_err(|e| ContentClientError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ContentClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ContentClientError::InvalidResponse(e.to_string()))
    }
}
