use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::ContentClient;
use crate::application::services::MaterializeError;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    #[serde(rename = "filePath")]
    pub file_path: String,
}

#[derive(Serialize)]
pub struct ConvertResponse {
    pub message: String,
    pub mp3_file_path: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Re-invokes mp3 conversion for a wav already in the podcasts directory.
/// Idempotent: repeating the call rewrites the same delivery file.
#[tracing::instrument(skip(state))]
pub async fn convert_to_mp3_handler<C>(
    State(state): State<AppState<C>>,
    Json(request): Json<ConvertRequest>,
) -> impl IntoResponse
where
    C: ContentClient + 'static,
{
    match state.materializer.convert_existing(&request.file_path).await {
        Ok(mp3_path) => (
            StatusCode::OK,
            Json(ConvertResponse {
                message: format!("Converted {} to mp3", request.file_path),
                mp3_file_path: mp3_path.display().to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(file_path = %request.file_path, error = %e, "Conversion failed");
            let status = match &e {
                MaterializeError::InvalidName(_) => StatusCode::BAD_REQUEST,
                MaterializeError::MissingSource(_) => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
