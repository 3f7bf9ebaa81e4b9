use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{CompletionEngine, SpeechEngine};
use crate::domain::RecordingEntry;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Serialize)]
pub struct ErrorStatusResponse {
    pub status: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct RecordingResponse {
    pub status: String,
    pub recording: RecordingEntry,
}

#[derive(Serialize)]
pub struct RecordingListResponse {
    pub status: String,
    pub recordings: Vec<RecordingEntry>,
}

fn store_error(message: String) -> (StatusCode, Json<ErrorStatusResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorStatusResponse {
            status: "error".to_string(),
            message,
        }),
    )
}

#[tracing::instrument(skip(state, entry), fields(id = %entry.id))]
pub async fn save_recording_handler<S, C>(
    State(state): State<AppState<S, C>>,
    Json(entry): Json<RecordingEntry>,
) -> impl IntoResponse
where
    S: SpeechEngine + 'static,
    C: CompletionEngine + 'static,
{
    match state.recording_store.save(&entry).await {
        Ok(()) => {
            tracing::info!("Recording saved");
            (
                StatusCode::OK,
                Json(StatusResponse {
                    status: "success".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to save recording");
            store_error(e.to_string()).into_response()
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn get_recording_handler<S, C>(
    State(state): State<AppState<S, C>>,
    Path(id): Path<String>,
) -> impl IntoResponse
where
    S: SpeechEngine + 'static,
    C: CompletionEngine + 'static,
{
    match state.recording_store.get(&id).await {
        Ok(Some(recording)) => (
            StatusCode::OK,
            Json(RecordingResponse {
                status: "success".to_string(),
                recording,
            }),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorStatusResponse {
                status: "error".to_string(),
                message: "Recording not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read recording");
            store_error(e.to_string()).into_response()
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn list_recordings_handler<S, C>(
    State(state): State<AppState<S, C>>,
) -> impl IntoResponse
where
    S: SpeechEngine + 'static,
    C: CompletionEngine + 'static,
{
    match state.recording_store.get_all().await {
        Ok(recordings) => (
            StatusCode::OK,
            Json(RecordingListResponse {
                status: "success".to_string(),
                recordings,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list recordings");
            store_error(e.to_string()).into_response()
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn delete_recording_handler<S, C>(
    State(state): State<AppState<S, C>>,
    Path(id): Path<String>,
) -> impl IntoResponse
where
    S: SpeechEngine + 'static,
    C: CompletionEngine + 'static,
{
    match state.recording_store.delete(&id).await {
        Ok(true) => {
            tracing::info!("Recording deleted");
            (
                StatusCode::OK,
                Json(StatusResponse {
                    status: "success".to_string(),
                }),
            )
                .into_response()
        }
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ErrorStatusResponse {
                status: "error".to_string(),
                message: "Recording not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to delete recording");
            store_error(e.to_string()).into_response()
        }
    }
}
