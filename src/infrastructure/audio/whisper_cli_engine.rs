use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;

use crate::application::ports::{SpeechEngine, SpeechEngineError};
use crate::domain::{Transcript, TranscriptSegment};

/// Speech engine backed by the `whisper` command-line tool.
///
/// Whisper writes its result as `<input stem>.json` into the requested
/// output directory; that file is read, parsed, and removed here.
pub struct WhisperCliEngine {
    binary: String,
    model: String,
}

#[derive(Deserialize)]
struct WhisperOutput {
    text: String,
    #[serde(default)]
    segments: Vec<WhisperSegment>,
}

#[derive(Deserialize)]
struct WhisperSegment {
    start: f64,
    end: f64,
    text: String,
}

impl WhisperCliEngine {
    pub fn new(binary: String, model: String) -> Self {
        Self { binary, model }
    }
}

#[async_trait]
impl SpeechEngine for WhisperCliEngine {
    async fn transcribe(&self, audio_path: &Path) -> Result<Transcript, SpeechEngineError> {
        let output_dir = std::env::temp_dir();

        tracing::debug!(
            path = %audio_path.display(),
            model = %self.model,
            "Invoking whisper CLI"
        );

        let output = Command::new(&self.binary)
            .arg(audio_path)
            .args(["--model", &self.model])
            .args(["--output_format", "json"])
            .arg("--output_dir")
            .arg(&output_dir)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(SpeechEngineError::InvocationFailed(stderr));
        }

        let stem = audio_path
            .file_stem()
            .ok_or_else(|| {
                SpeechEngineError::OutputUnreadable("audio path has no file stem".to_string())
            })?
            .to_string_lossy();
        let json_path = output_dir.join(format!("{}.json", stem));

        let raw = tokio::fs::read_to_string(&json_path).await?;
        let parsed: WhisperOutput = serde_json::from_str(&raw)
            .map_err(|e| SpeechEngineError::OutputUnreadable(e.to_string()))?;

        if let Err(e) = tokio::fs::remove_file(&json_path).await {
            tracing::warn!(path = %json_path.display(), error = %e, "Failed to remove whisper output file");
        }

        let segments = parsed
            .segments
            .into_iter()
            .map(|s| TranscriptSegment {
                start: s.start,
                end: s.end,
                text: s.text,
            })
            .collect();

        tracing::info!(chars = parsed.text.len(), "Whisper transcription completed");

        Ok(Transcript::new(parsed.text, segments))
    }
}
