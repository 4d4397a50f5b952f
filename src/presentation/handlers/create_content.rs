use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::ContentClient;
use crate::domain::ContentRequest;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Runs the full creation pipeline synchronously: the response carries
/// the terminal job record, or `{error}` on any pipeline failure.
#[tracing::instrument(skip(state, request), fields(output_type = ?request.output_type))]
pub async fn create_content_handler<C>(
    State(state): State<AppState<C>>,
    Json(request): Json<ContentRequest>,
) -> impl IntoResponse
where
    C: ContentClient + 'static,
{
    match state.content_service.create_content(&request).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Content creation failed");
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
