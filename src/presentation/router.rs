use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{CompletionEngine, SpeechEngine};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    delete_recording_handler, generate_notes_handler, get_recording_handler, health_handler,
    list_recordings_handler, save_recording_handler, transcribe_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<S, C>(state: AppState<S, C>, max_upload_bytes: usize) -> Router
where
    S: SpeechEngine + 'static,
    C: CompletionEngine + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/transcribe", post(transcribe_handler::<S, C>))
        .route("/api/generate-notes", post(generate_notes_handler::<S, C>))
        .route(
            "/api/recordings",
            post(save_recording_handler::<S, C>).get(list_recordings_handler::<S, C>),
        )
        .route(
            "/api/recordings/{id}",
            get(get_recording_handler::<S, C>).delete(delete_recording_handler::<S, C>),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
