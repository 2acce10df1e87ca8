//! Scoped temp-file handling for voice uploads

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::Result;

/// Transient on-disk copy of one uploaded audio file
///
/// The file exists for the lifetime of this value and is removed on drop,
/// so every exit path of a handler releases it. Paths carry a uuid so
/// concurrent requests can never collide on the same artifact.
pub struct TempUpload {
    path: PathBuf,
}

impl TempUpload {
    /// Write the upload body to a uniquely-named file in the OS temp dir
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be written
    pub async fn write(file_name: &str, bytes: &[u8]) -> Result<Self> {
        let name = sanitize_file_name(file_name);
        let path = std::env::temp_dir().join(format!("credbot-{}-{name}", Uuid::new_v4()));
        tokio::fs::write(&path, bytes).await?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote upload to temp file");

        Ok(Self { path })
    }

    /// Path of the transient file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempUpload {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            // Cleanup failure must never mask the primary response
            tracing::warn!(path = %self.path.display(), error = %e, "failed to remove temp upload");
        }
    }
}

/// Reduce a client-supplied file name to its final path component
///
/// Keeps the extension (the STT provider sniffs the container format from
/// it) while making traversal-shaped names like `../../etc/cron.d/x`
/// harmless.
fn sanitize_file_name(file_name: &str) -> String {
    Path::new(file_name)
        .file_name()
        .map_or_else(|| "audio".to_string(), |n| n.to_string_lossy().into_owned())
}
