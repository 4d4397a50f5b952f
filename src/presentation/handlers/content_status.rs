use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::ContentClient;
use crate::presentation::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub status: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_text: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// One poll against the remote service, no looping. A remote-reported
/// job error surfaces as `{error}`, matching the creation flow.
#[tracing::instrument(skip(state))]
pub async fn content_status_handler<C>(
    State(state): State<AppState<C>>,
    Path(request_id): Path<String>,
) -> impl IntoResponse
where
    C: ContentClient + 'static,
{
    match state.content_service.status(&request_id).await {
        Ok(snapshot) => {
            if let Some(message) = snapshot.error_message.filter(|m| !m.is_empty()) {
                tracing::warn!(request_id, error = %message, "Remote job reported an error");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse { error: message }),
                )
                    .into_response();
            }
            (
                StatusCode::OK,
                Json(StatusResponse {
                    status: snapshot.status,
                    audio_url: snapshot.audio_url,
                    audio_title: snapshot.audio_title,
                    response_text: snapshot.response_text,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Status check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
