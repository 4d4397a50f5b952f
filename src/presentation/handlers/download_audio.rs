use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::ContentClient;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadAudioParams {
    #[serde(default)]
    pub audio_url: String,
    #[serde(default)]
    pub audio_title: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadAudioResponse {
    pub file_path: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Download-and-transcode for a known audio URL and title, decoupled from
/// the creation flow.
#[tracing::instrument(skip(state, params))]
pub async fn download_audio_handler<C>(
    State(state): State<AppState<C>>,
    Path(request_id): Path<String>,
    Query(params): Query<DownloadAudioParams>,
) -> impl IntoResponse
where
    C: ContentClient + 'static,
{
    match state
        .materializer
        .materialize_audio(&params.audio_url, &params.audio_title)
        .await
    {
        Ok((wav_path, _mp3_path)) => (
            StatusCode::OK,
            Json(DownloadAudioResponse {
                file_path: wav_path.display().to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(request_id, error = %e, "Audio download failed");
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
