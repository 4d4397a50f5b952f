use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::ContentClient;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    content_status_handler, convert_to_mp3_handler, create_content_handler,
    download_audio_handler, health_handler, list_podcasts_handler, list_study_guides_handler,
    mp3_file_handler, podcast_file_handler, study_guide_handler,
};
use crate::presentation::state::AppState;

// Matches the remote payload cap: pdf resources arrive base64-inlined.
const BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

pub fn create_router<C>(state: AppState<C>) -> Router
where
    C: ContentClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/create-content", post(create_content_handler::<C>))
        .route(
            "/content/status/{request_id}",
            get(content_status_handler::<C>),
        )
        .route(
            "/download-audio/{request_id}",
            get(download_audio_handler::<C>),
        )
        .route("/podcasts", get(list_podcasts_handler::<C>))
        .route("/podcasts/{name}", get(podcast_file_handler::<C>))
        .route("/mp3/{name}", get(mp3_file_handler::<C>))
        .route("/study-guides", get(list_study_guides_handler::<C>))
        .route("/study-guides/{name}", get(study_guide_handler::<C>))
        .route("/convert-to-mp3", post(convert_to_mp3_handler::<C>))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
