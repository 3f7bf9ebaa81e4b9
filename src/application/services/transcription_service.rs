use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{SpeechEngine, SpeechEngineError, Transcoder, TranscoderError};
use crate::domain::Transcript;

use super::scratch::ScratchFile;

/// Orchestrates the audio normalization and transcription cascade.
///
/// Strategy order: direct engine attempt on the upload as-is, then (only on
/// demonstrated failure) a transcode to canonical 16 kHz mono PCM followed by
/// one more engine attempt. Uploaded browser recordings arrive in
/// inconsistent container formats, but the engine usually tolerates them, so
/// the costlier conversion runs only on demand.
pub struct TranscriptionService<S>
where
    S: SpeechEngine,
{
    engine: Arc<S>,
    transcoder: Arc<dyn Transcoder>,
    call_timeout: Duration,
}

impl<S> TranscriptionService<S>
where
    S: SpeechEngine,
{
    pub fn new(engine: Arc<S>, transcoder: Arc<dyn Transcoder>, call_timeout: Duration) -> Self {
        Self {
            engine,
            transcoder,
            call_timeout,
        }
    }

    pub async fn transcribe(
        &self,
        bytes: &[u8],
        claimed_filename: Option<&str>,
    ) -> Result<Transcript, TranscriptionError> {
        let scratch = ScratchFile::create(bytes, claimed_filename)?;

        let first_attempt = self.engine_attempt(scratch.path()).await;
        let first_error = match first_attempt {
            Ok(transcript) => {
                tracing::debug!("Direct transcription succeeded, no conversion needed");
                return Ok(transcript.normalized());
            }
            Err(e) => e,
        };

        // An empty upload is a caller error, not a conversion candidate.
        if bytes.is_empty() {
            return Err(TranscriptionError::EmptyRecording);
        }

        tracing::info!(
            error = %first_error,
            "Direct transcription failed, falling back to canonical conversion"
        );

        let converted = scratch.canonical_sibling();
        let transcode_result = tokio::time::timeout(
            self.call_timeout,
            self.transcoder
                .transcode_to_canonical(scratch.path(), &converted),
        )
        .await;

        match transcode_result {
            Err(_) => {
                remove_quietly(&converted);
                Err(TranscriptionError::Timeout("transcoder"))
            }
            Ok(Err(e)) => {
                remove_quietly(&converted);
                Err(TranscriptionError::ConversionFailed(e))
            }
            Ok(Ok(())) => {
                let second_attempt = self.engine_attempt(&converted).await;
                remove_quietly(&converted);
                second_attempt.map(Transcript::normalized)
            }
        }
    }

    async fn engine_attempt(&self, path: &Path) -> Result<Transcript, TranscriptionError> {
        tokio::time::timeout(self.call_timeout, self.engine.transcribe(path))
            .await
            .map_err(|_| TranscriptionError::Timeout("speech engine"))?
            .map_err(TranscriptionError::EngineFailed)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("No audio file provided")]
    NoAudio,
    #[error("Empty recording")]
    EmptyRecording,
    #[error("Transcription failed: {0}")]
    EngineFailed(#[source] SpeechEngineError),
    #[error("Audio conversion failed: {0}")]
    ConversionFailed(#[source] TranscoderError),
    #[error("External call timed out: {0}")]
    Timeout(&'static str),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl TranscriptionError {
    /// Failure stage, for logs and response classification.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::NoAudio => "no-file",
            Self::EmptyRecording => "empty-file",
            Self::EngineFailed(_) | Self::Timeout(_) | Self::Io(_) => "engine-failure",
            Self::ConversionFailed(_) => "conversion-failure",
        }
    }

    /// Missing or empty uploads are caller errors; everything else is a
    /// pipeline failure.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::NoAudio | Self::EmptyRecording)
    }
}

fn remove_quietly(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to remove converted audio file");
        }
    }
}
