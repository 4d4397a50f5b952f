use std::path::PathBuf;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::ContentClient;
use crate::application::services::MaterializeError;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct StudyGuideResponse {
    pub name: String,
    pub content: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state))]
pub async fn list_podcasts_handler<C>(State(state): State<AppState<C>>) -> impl IntoResponse
where
    C: ContentClient + 'static,
{
    match state.materializer.list_podcasts().await {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list podcasts");
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

#[tracing::instrument(skip(state))]
pub async fn list_study_guides_handler<C>(State(state): State<AppState<C>>) -> impl IntoResponse
where
    C: ContentClient + 'static,
{
    match state.materializer.list_study_guides().await {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list study guides");
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

#[tracing::instrument(skip(state))]
pub async fn study_guide_handler<C>(
    State(state): State<AppState<C>>,
    Path(name): Path<String>,
) -> impl IntoResponse
where
    C: ContentClient + 'static,
{
    match state.materializer.read_study_guide(&name).await {
        Ok(content) => (StatusCode::OK, Json(StudyGuideResponse { name, content })).into_response(),
        Err(e) => artifact_error(&name, e),
    }
}

/// Serves a stored wav by name. The artifact directories are small and
/// local, so a buffered read is fine here.
#[tracing::instrument(skip(state))]
pub async fn podcast_file_handler<C>(
    State(state): State<AppState<C>>,
    Path(name): Path<String>,
) -> impl IntoResponse
where
    C: ContentClient + 'static,
{
    match state.materializer.podcast_path(&name) {
        Ok(path) => serve_audio_file(&name, path, "audio/wav").await,
        Err(e) => artifact_error(&name, e),
    }
}

/// Serves a stored mp3 by name.
#[tracing::instrument(skip(state))]
pub async fn mp3_file_handler<C>(
    State(state): State<AppState<C>>,
    Path(name): Path<String>,
) -> impl IntoResponse
where
    C: ContentClient + 'static,
{
    match state.materializer.mp3_path(&name) {
        Ok(path) => serve_audio_file(&name, path, "audio/mpeg").await,
        Err(e) => artifact_error(&name, e),
    }
}

async fn serve_audio_file(
    name: &str,
    path: PathBuf,
    content_type: &'static str,
) -> axum::response::Response {
    match tokio::fs::read(&path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type)],
            bytes,
        )
            .into_response(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Artifact not found: {}", name),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(name, error = %e, "Failed to read artifact");
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

fn artifact_error(name: &str, e: MaterializeError) -> axum::response::Response {
    let status = match &e {
        MaterializeError::InvalidName(_) => StatusCode::BAD_REQUEST,
        MaterializeError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
            StatusCode::NOT_FOUND
        }
        MaterializeError::MissingSource(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    tracing::warn!(name, error = %e, "Artifact request rejected");
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}
