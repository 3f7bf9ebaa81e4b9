use serde::{Deserialize, Serialize};

/// One time-aligned span of recognized speech.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// Recognized speech for one recording.
///
/// `text` is always present and trimmed; an empty string means no speech was
/// detected, which is a valid result, not a failure. Segments are optional
/// timing metadata and may be empty even when `text` is not.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
    #[serde(default)]
    pub segments: Vec<TranscriptSegment>,
}

impl Transcript {
    pub fn new(text: impl Into<String>, segments: Vec<TranscriptSegment>) -> Self {
        Self {
            text: text.into(),
            segments,
        }
    }

    /// Trim the recognized text, leaving segment timing untouched.
    pub fn normalized(mut self) -> Self {
        self.text = self.text.trim().to_string();
        self
    }
}
