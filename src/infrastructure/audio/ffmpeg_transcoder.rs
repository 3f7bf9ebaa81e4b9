use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{Transcoder, TranscoderError};

/// Transcoder backed by the `ffmpeg` command-line utility.
pub struct FfmpegTranscoder {
    binary: String,
}

impl FfmpegTranscoder {
    pub fn new(binary: String) -> Self {
        Self { binary }
    }
}

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    async fn transcode_to_canonical(
        &self,
        input: &Path,
        output: &Path,
    ) -> Result<(), TranscoderError> {
        tracing::debug!(
            input = %input.display(),
            output = %output.display(),
            "Converting audio to 16kHz mono PCM"
        );

        let result = Command::new(&self.binary)
            .args(["-y", "-i"])
            .arg(input)
            .args(["-ar", "16000", "-ac", "1", "-c:a", "pcm_s16le"])
            .arg(output)
            .output()
            .await?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr).trim().to_string();
            return Err(TranscoderError::Failed(stderr));
        }

        Ok(())
    }
}
