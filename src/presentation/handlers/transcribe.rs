use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{CompletionEngine, SpeechEngine};
use crate::application::services::TranscriptionError;
use crate::domain::TranscriptSegment;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub transcription: String,
    pub segments: Vec<TranscriptSegment>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<S, C>(
    State(state): State<AppState<S, C>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    S: SpeechEngine + 'static,
    C: CompletionEngine + 'static,
{
    let mut audio: Option<(Option<String>, Vec<u8>)> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        if field.name() != Some("audio") {
            continue;
        }

        let filename = field.file_name().map(String::from);
        match field.bytes().await {
            Ok(bytes) => {
                audio = Some((filename, bytes.to_vec()));
                break;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read audio field");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read audio field: {}", e),
                    }),
                )
                    .into_response();
            }
        }
    }

    let Some((filename, bytes)) = audio else {
        tracing::warn!("Transcribe request with no audio field");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: TranscriptionError::NoAudio.to_string(),
            }),
        )
            .into_response();
    };

    tracing::debug!(
        filename = filename.as_deref().unwrap_or("unknown"),
        bytes = bytes.len(),
        "Audio upload received"
    );

    match state
        .transcription_service
        .transcribe(&bytes, filename.as_deref())
        .await
    {
        Ok(transcript) => {
            tracing::info!(
                chars = transcript.text.len(),
                segments = transcript.segments.len(),
                "Transcription completed"
            );
            (
                StatusCode::OK,
                Json(TranscribeResponse {
                    transcription: transcript.text,
                    segments: transcript.segments,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(stage = e.stage(), error = %e, "Transcription failed");
            let status = if e.is_input_error() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
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
