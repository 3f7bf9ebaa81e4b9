use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Container extension assumed for browser recordings when the upload
/// carries no usable filename.
const DEFAULT_EXTENSION: &str = "webm";

/// A temporary audio file scoped to one request.
///
/// The file is created in the shared temp directory under a
/// collision-resistant name and removed when the handle is dropped, on every
/// exit path. Removal failure is logged, never escalated.
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    pub fn create(bytes: &[u8], claimed_filename: Option<&str>) -> io::Result<Self> {
        let extension = infer_extension(claimed_filename);
        let path = std::env::temp_dir().join(format!("{}.{}", Uuid::new_v4(), extension));
        std::fs::write(&path, bytes)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Scratch file created");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling path for the canonical-format intermediate produced by the
    /// transcoding fallback. Always distinct from the scratch path itself.
    pub fn canonical_sibling(&self) -> PathBuf {
        self.path.with_extension("canonical.wav")
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove scratch file");
        }
    }
}

/// The claimed filename is client-supplied; anything but a plain
/// alphanumeric suffix falls back to the default so path separators and
/// other surprises never reach the scratch path.
fn infer_extension(claimed_filename: Option<&str>) -> String {
    claimed_filename
        .and_then(|name| name.rsplit_once('.').map(|(_, ext)| ext))
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}
