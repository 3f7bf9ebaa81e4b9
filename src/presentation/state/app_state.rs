use std::sync::Arc;

use crate::application::ports::{CompletionEngine, RecordingStore, SpeechEngine};
use crate::application::services::{NarrativeService, TranscriptionService};

pub struct AppState<S, C>
where
    S: SpeechEngine,
    C: CompletionEngine,
{
    pub transcription_service: Arc<TranscriptionService<S>>,
    pub narrative_service: Arc<NarrativeService<C>>,
    pub recording_store: Arc<dyn RecordingStore>,
}

impl<S, C> Clone for AppState<S, C>
where
    S: SpeechEngine,
    C: CompletionEngine,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
            narrative_service: Arc::clone(&self.narrative_service),
            recording_store: Arc::clone(&self.recording_store),
        }
    }
}
