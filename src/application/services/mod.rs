mod narrative_service;
mod prompt;
mod response_extractor;
mod scratch;
mod transcription_service;

pub use narrative_service::{NarrativeError, NarrativeService};
pub use prompt::build_notes_prompt;
pub use response_extractor::extract_narrative;
pub use scratch::ScratchFile;
pub use transcription_service::{TranscriptionError, TranscriptionService};
