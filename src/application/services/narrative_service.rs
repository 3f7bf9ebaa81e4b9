use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{CompletionEngine, CompletionError};
use crate::domain::ClinicalNarrative;

use super::prompt::build_notes_prompt;
use super::response_extractor::extract_narrative;

/// Composes prompt construction, the language-model call, and response
/// repair. Transport failure is an error; parse failure is not — it degrades
/// to the default records inside the extractor and never reaches the caller
/// as a failure status.
pub struct NarrativeService<C>
where
    C: CompletionEngine,
{
    engine: Arc<C>,
    call_timeout: Duration,
}

impl<C> NarrativeService<C>
where
    C: CompletionEngine,
{
    pub fn new(engine: Arc<C>, call_timeout: Duration) -> Self {
        Self {
            engine,
            call_timeout,
        }
    }

    pub async fn generate(&self, transcription: &str) -> Result<ClinicalNarrative, NarrativeError> {
        let prompt = build_notes_prompt(transcription);

        let completion = tokio::time::timeout(self.call_timeout, self.engine.complete(&prompt))
            .await
            .map_err(|_| NarrativeError::Timeout)?
            .map_err(NarrativeError::Completion)?;

        tracing::debug!(chars = completion.len(), "Model completion received");

        Ok(extract_narrative(&completion))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    #[error("Failed to generate notes: {0}")]
    Completion(#[source] CompletionError),
    #[error("Note generation timed out")]
    Timeout,
}
