mod narrative;
mod recording;
mod transcript;

pub use narrative::{ClinicalNarrative, DoctorNote, PatientSummary};
pub use recording::RecordingEntry;
pub use transcript::{Transcript, TranscriptSegment};
