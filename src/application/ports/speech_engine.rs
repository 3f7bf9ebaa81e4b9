use std::path::Path;

use async_trait::async_trait;

use crate::domain::Transcript;

/// Speech-to-text collaborator. Consumes an audio file on disk and returns
/// recognized text plus optional time-aligned segments.
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    async fn transcribe(&self, audio_path: &Path) -> Result<Transcript, SpeechEngineError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechEngineError {
    #[error("engine invocation failed: {0}")]
    InvocationFailed(String),
    #[error("engine output unreadable: {0}")]
    OutputUnreadable(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
