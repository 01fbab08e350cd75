//! Transient upload storage.
//!
//! Every upload lives in its own uniquely named file for exactly one
//! request: written once by the upload receiver, read once by the part
//! encoder, removed when the request's [`TransientFile`] guard drops.

use crate::error::PipelineError;
use gateway_core::error::AppError;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct TransientStore {
    dir: PathBuf,
}

impl TransientStore {
    pub async fn new(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir = dir.into();
        if !dir.exists() {
            fs::create_dir_all(&dir).await?;
        }
        Ok(Self { dir })
    }

    /// Write the uploaded bytes under a fresh unique name.
    ///
    /// Names are uuid-derived, so concurrent requests never collide.
    pub async fn store(
        &self,
        data: Vec<u8>,
        media_type: String,
    ) -> Result<TransientFile, PipelineError> {
        let size = data.len() as i64;
        let path = self.dir.join(Uuid::new_v4().to_string());

        fs::write(&path, data)
            .await
            .map_err(|e| PipelineError::Encoding(format!("failed to store upload: {}", e)))?;

        tracing::debug!(path = %path.display(), size, "Stored transient upload");

        Ok(TransientFile {
            path,
            media_type,
            size,
        })
    }
}

/// Scoped handle to one request's upload.
///
/// Dropping the handle removes the underlying file, so the file is deleted
/// on every exit path of the owning handler. Removal is best-effort: a
/// failure is logged and never surfaces into the response.
#[derive(Debug)]
pub struct TransientFile {
    path: PathBuf,
    media_type: String,
    size: i64,
}

impl TransientFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Media type declared by the client for the uploaded field.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn size(&self) -> i64 {
        self.size
    }
}

impl Drop for TransientFile {
    fn drop(&mut self) {
        if let Err(err) = std::fs::remove_file(&self.path) {
            tracing::warn!(
                path = %self.path.display(),
                error = %err,
                "failed to remove transient upload"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_store() -> (PathBuf, TransientStore) {
        let dir = std::env::temp_dir().join(format!("transient-test-{}", Uuid::new_v4()));
        let store = TransientStore::new(&dir)
            .await
            .expect("Failed to create store");
        (dir, store)
    }

    #[tokio::test]
    async fn store_writes_distinct_files() {
        let (dir, store) = test_store().await;

        let a = store
            .store(b"aaa".to_vec(), "text/plain".to_string())
            .await
            .unwrap();
        let b = store
            .store(b"bbb".to_vec(), "application/pdf".to_string())
            .await
            .unwrap();

        assert_ne!(a.path(), b.path());
        assert!(a.path().exists());
        assert!(b.path().exists());
        assert_eq!(3, a.size());
        assert_eq!("text/plain", a.media_type());
        assert_eq!("application/pdf", b.media_type());

        drop(a);
        drop(b);
        let _ = fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn drop_removes_the_file() {
        let (dir, store) = test_store().await;

        let file = store
            .store(b"payload".to_vec(), "audio/mpeg".to_string())
            .await
            .unwrap();
        let path = file.path().to_path_buf();
        assert!(path.exists());

        drop(file);
        assert!(!path.exists());

        let _ = fs::remove_dir_all(&dir).await;
    }
}
