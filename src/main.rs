use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use lorecast::application::ports::ResultCache;
use lorecast::application::services::{ArtifactLayout, ContentService, Materializer};
use lorecast::infrastructure::media::{FfmpegTranscoder, HttpAudioFetcher};
use lorecast::infrastructure::observability::{TracingConfig, init_tracing};
use lorecast::infrastructure::persistence::JsonFileCache;
use lorecast::infrastructure::remote::AutoContentClient;
use lorecast::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    let token = std::fs::read_to_string(&settings.remote.api_key_file)
        .map_err(|e| {
            anyhow::anyhow!(
                "failed to read API key file {}: {e}",
                settings.remote.api_key_file.display()
            )
        })?
        .trim()
        .to_string();

    let client = Arc::new(AutoContentClient::new(
        settings.remote.base_url.clone(),
        token,
    ));

    let cache: Arc<dyn ResultCache> =
        Arc::new(JsonFileCache::load(settings.storage.cache_file.clone()).await?);

    let layout = ArtifactLayout {
        podcasts_dir: settings.storage.podcasts_dir.clone(),
        mp3_dir: settings.storage.mp3_dir.clone(),
        study_guides_dir: settings.storage.study_guides_dir.clone(),
    };
    let materializer = Arc::new(Materializer::new(
        Arc::new(HttpAudioFetcher::new()),
        Arc::new(FfmpegTranscoder::new("ffmpeg".to_string())),
        layout,
    ));

    let content_service = Arc::new(ContentService::new(
        Arc::clone(&client),
        cache,
        Arc::clone(&materializer),
        settings.poll.policy(),
    ));

    let state = AppState {
        content_service,
        materializer,
    };
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
