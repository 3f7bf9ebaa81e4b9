use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tokio::sync::Mutex;
use tower::ServiceExt;

use medscribe::application::ports::{
    RecordingStore, SpeechEngine, SpeechEngineError, StoreError, Transcoder, TranscoderError,
};
use medscribe::application::services::{NarrativeService, TranscriptionService};
use medscribe::domain::{RecordingEntry, Transcript};
use medscribe::infrastructure::llm::MockCompletionEngine;
use medscribe::presentation::{AppState, create_router};

const TEST_TIMEOUT: Duration = Duration::from_secs(5);
const TEST_MAX_UPLOAD: usize = 10 * 1024 * 1024;
const BOUNDARY: &str = "test-boundary-7f3a";

struct MockSpeechEngine {
    transcript: Transcript,
}

#[async_trait]
impl SpeechEngine for MockSpeechEngine {
    async fn transcribe(&self, _audio_path: &Path) -> Result<Transcript, SpeechEngineError> {
        Ok(self.transcript.clone())
    }
}

struct MockTranscoder;

#[async_trait]
impl Transcoder for MockTranscoder {
    async fn transcode_to_canonical(
        &self,
        _input: &Path,
        output: &Path,
    ) -> Result<(), TranscoderError> {
        std::fs::write(output, b"RIFF").map_err(TranscoderError::Io)
    }
}

#[derive(Default)]
struct InMemoryRecordingStore {
    entries: Mutex<Vec<RecordingEntry>>,
}

#[async_trait]
impl RecordingStore for InMemoryRecordingStore {
    async fn save(&self, entry: &RecordingEntry) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().await;
        match entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => *existing = entry.clone(),
            None => entries.push(entry.clone()),
        }
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<RecordingEntry>, StoreError> {
        Ok(self
            .entries
            .lock()
            .await
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn get_all(&self) -> Result<Vec<RecordingEntry>, StoreError> {
        Ok(self.entries.lock().await.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        Ok(entries.len() < before)
    }
}

fn build_router(transcript: Transcript, completion: &str) -> axum::Router {
    let transcription_service = Arc::new(TranscriptionService::new(
        Arc::new(MockSpeechEngine { transcript }),
        Arc::new(MockTranscoder),
        TEST_TIMEOUT,
    ));
    let narrative_service = Arc::new(NarrativeService::new(
        Arc::new(MockCompletionEngine::new(completion)),
        TEST_TIMEOUT,
    ));
    let state = AppState {
        transcription_service,
        narrative_service,
        recording_store: Arc::new(InMemoryRecordingStore::default()),
    };
    create_router(state, TEST_MAX_UPLOAD)
}

fn multipart_body(field_name: &str, filename: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field_name, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn multipart_request(uri: &str, field_name: &str, bytes: &[u8]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(field_name, "clip.wav", bytes)))
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn given_health_request_then_returns_healthy_with_timestamp() {
    let router = build_router(Transcript::default(), "{}");

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert!(
        chrono::DateTime::parse_from_rfc3339(json["timestamp"].as_str().unwrap()).is_ok(),
        "timestamp must be RFC 3339"
    );
}

#[tokio::test]
async fn given_upload_without_audio_field_when_transcribing_then_returns_400() {
    let router = build_router(Transcript::default(), "{}");

    let response = router
        .oneshot(multipart_request("/api/transcribe", "file", b"not audio"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["error"], "No audio file provided");
}

#[tokio::test]
async fn given_silent_recording_when_transcribing_then_returns_empty_transcription_not_error() {
    // Engine recognizes no speech: empty text, no segments. Valid result.
    let router = build_router(Transcript::default(), "{}");
    let silent_wav = vec![0u8; 64_000];

    let response = router
        .oneshot(multipart_request("/api/transcribe", "audio", &silent_wav))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["transcription"], "");
    assert_eq!(json["segments"], serde_json::json!([]));
}

#[tokio::test]
async fn given_recognized_speech_when_transcribing_then_returns_text_and_segments() {
    let transcript = Transcript::new(
        " Patient reports headache. ",
        vec![medscribe::domain::TranscriptSegment {
            start: 0.0,
            end: 2.4,
            text: "Patient reports headache.".to_string(),
        }],
    );
    let router = build_router(transcript, "{}");

    let response = router
        .oneshot(multipart_request("/api/transcribe", "audio", b"fake-webm"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["transcription"], "Patient reports headache.");
    assert_eq!(json["segments"][0]["text"], "Patient reports headache.");
}

#[tokio::test]
async fn given_missing_transcription_when_generating_notes_then_returns_400() {
    let router = build_router(Transcript::default(), "{}");

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/generate-notes",
            serde_json::json!({}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["error"], "No transcription provided");
}

#[tokio::test]
async fn given_prose_wrapped_completion_when_generating_notes_then_both_records_populated() {
    let completion = concat!(
        "Sure! Here is the structured output you asked for:\n",
        r#"{"doctorNotes":{"subjective":"Headache for 3 days","objective":"Alert, no distress","assessment":"Tension headache","plan":"Hydration and rest","medications":["ibuprofen 400mg"],"followUp":"Return in 2 weeks"},"patientSummary":{"summary":"We discussed your headaches","keyPoints":["Drink more water"],"nextSteps":["Rest"],"medications":["ibuprofen"]}}"#,
        "\nLet me know if you need anything else."
    );
    let router = build_router(Transcript::default(), completion);

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/generate-notes",
            serde_json::json!({"transcription": "Patient reports headache for 3 days."}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["doctorNotes"]["assessment"], "Tension headache");
    assert_eq!(json["doctorNotes"]["followUp"], "Return in 2 weeks");
    assert_eq!(json["patientSummary"]["keyPoints"][0], "Drink more water");
}

#[tokio::test]
async fn given_unparseable_completion_when_generating_notes_then_returns_default_records_with_200()
{
    let router = build_router(Transcript::default(), "I am sorry, I cannot help with that.");

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/generate-notes",
            serde_json::json!({"transcription": "Patient reports headache."}),
        ))
        .await
        .unwrap();

    // Parse failure is absorbed by default substitution, never surfaced.
    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(
        json["doctorNotes"]["subjective"],
        "Patient reports symptoms as transcribed"
    );
    assert_eq!(
        json["patientSummary"]["summary"],
        "Please refer to your clinical notes for details"
    );
}

#[tokio::test]
async fn given_recording_lifecycle_then_save_get_list_delete_roundtrip() {
    let router = build_router(Transcript::default(), "{}");

    let entry = serde_json::json!({
        "id": "rec-1",
        "patientName": "Jane Doe",
        "doctorName": "Dr. Smith",
        "duration": 120.5,
        "transcription": "Patient reports headache."
    });

    let response = router
        .clone()
        .oneshot(json_request("POST", "/api/recordings", entry))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await["status"], "success");

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/recordings/rec-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["recording"]["patientName"], "Jane Doe");
    assert_eq!(json["recording"]["status"], "completed");

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/recordings")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = response_json(response).await;
    assert_eq!(json["recordings"].as_array().unwrap().len(), 1);

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/recordings/rec-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/recordings/rec-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_unknown_recording_id_when_fetching_then_returns_404_error_envelope() {
    let router = build_router(Transcript::default(), "{}");

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/recordings/no-such-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = response_json(response).await;
    assert_eq!(json["status"], "error");
}
