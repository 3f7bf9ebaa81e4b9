use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use medscribe::application::ports::{RecordingStore, Transcoder};
use medscribe::application::services::{NarrativeService, TranscriptionService};
use medscribe::infrastructure::audio::{FfmpegTranscoder, WhisperCliEngine};
use medscribe::infrastructure::llm::OllamaClient;
use medscribe::infrastructure::observability::{TracingConfig, init_tracing};
use medscribe::infrastructure::store::CsvRecordingStore;
use medscribe::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::from_env(), settings.server.port);

    // Collaborators are constructed once at startup and injected; nothing is
    // re-instantiated per request.
    let speech_engine = Arc::new(WhisperCliEngine::new(
        settings.whisper.binary.clone(),
        settings.whisper.model.clone(),
    ));
    let transcoder: Arc<dyn Transcoder> =
        Arc::new(FfmpegTranscoder::new(settings.ffmpeg.binary.clone()));
    let completion_engine = Arc::new(OllamaClient::new(
        settings.ollama.base_url.clone(),
        settings.ollama.model.clone(),
    ));
    let recording_store: Arc<dyn RecordingStore> =
        Arc::new(CsvRecordingStore::new(&settings.store.csv_path)?);

    let transcription_service = Arc::new(TranscriptionService::new(
        speech_engine,
        transcoder,
        settings.external_call_timeout(),
    ));
    let narrative_service = Arc::new(NarrativeService::new(
        completion_engine,
        settings.external_call_timeout(),
    ));

    let state = AppState {
        transcription_service,
        narrative_service,
        recording_store,
    };

    let router = create_router(state, settings.max_upload_bytes());

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
