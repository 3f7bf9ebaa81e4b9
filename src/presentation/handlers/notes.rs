use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{CompletionEngine, SpeechEngine};
use crate::domain::{DoctorNote, PatientSummary};
use crate::infrastructure::observability::sanitize_transcript;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct GenerateNotesRequest {
    #[serde(default)]
    pub transcription: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateNotesResponse {
    pub doctor_notes: DoctorNote,
    pub patient_summary: PatientSummary,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn generate_notes_handler<S, C>(
    State(state): State<AppState<S, C>>,
    Json(request): Json<GenerateNotesRequest>,
) -> impl IntoResponse
where
    S: SpeechEngine + 'static,
    C: CompletionEngine + 'static,
{
    if request.transcription.trim().is_empty() {
        tracing::warn!("Generate-notes request with no transcription");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No transcription provided".to_string(),
            }),
        )
            .into_response();
    }

    tracing::debug!(
        transcription = %sanitize_transcript(&request.transcription),
        "Generating clinical notes"
    );

    match state
        .narrative_service
        .generate(&request.transcription)
        .await
    {
        Ok(narrative) => (
            StatusCode::OK,
            Json(GenerateNotesResponse {
                doctor_notes: narrative.doctor_notes,
                patient_summary: narrative.patient_summary,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Note generation failed");
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
