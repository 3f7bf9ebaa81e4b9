use std::path::Path;

use async_trait::async_trait;

/// External audio-transcoding collaborator. Rewrites an input file into the
/// canonical format the speech engine is most reliably able to consume:
/// mono, 16 kHz, 16-bit linear PCM.
#[async_trait]
pub trait Transcoder: Send + Sync {
    async fn transcode_to_canonical(
        &self,
        input: &Path,
        output: &Path,
    ) -> Result<(), TranscoderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscoderError {
    /// The utility exited non-zero; carries its diagnostic (stderr) text.
    #[error("transcoder exited with failure: {0}")]
    Failed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
