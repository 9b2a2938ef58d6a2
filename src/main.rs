use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use readaloud_backend::controllers::tts::TtsController;
use readaloud_backend::domain::tts::TtsService;
use readaloud_backend::infrastructure::config::{Config, LogFormat};
use readaloud_backend::infrastructure::http::start_http_server;
use readaloud_backend::infrastructure::repositories::SpeechApiRepository;
use readaloud_backend::infrastructure::storage::ArtifactStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting ReadAloud Backend on {}:{}",
        config.host,
        config.port
    );

    tracing::info!(
        provider_url = %config.tts_api_url,
        model = %config.tts_model,
        voice = %config.tts_voice,
        artifact_dir = %config.artifact_dir.display(),
        "Speech provider configured"
    );

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject provider credentials)
    let tts_repo = Arc::new(SpeechApiRepository::new(
        config.tts_api_url.clone(),
        config.tts_api_key.clone(),
        config.tts_model.clone(),
        config.tts_voice.clone(),
        config.upstream_timeout_secs,
    )?);
    let artifact_store = Arc::new(ArtifactStore::new(
        config.artifact_dir.clone(),
        config.keep_artifacts,
    ));

    // 2. Instantiate services (inject repositories)
    let tts_service = Arc::new(TtsService::new(tts_repo, artifact_store));

    // 3. Instantiate controllers (inject services)
    let tts_controller = Arc::new(TtsController::new(tts_service));

    // Start HTTP server with all routes
    start_http_server(config, tts_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "readaloud_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "readaloud_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
