//! Storage abstraction trait
//!
//! This module defines the Storage trait that all blob-store backends must
//! implement, so the submission orchestrator never couples to a concrete
//! service.

use async_trait::async_trait;
use portal_core::{SelectedFile, StorageBackend, UploadResult};
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Failed to resolve public URL: {0}")]
    PublicUrlFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Blob-store abstraction.
///
/// `upload` stores the file's payload under `{folder}/{identifier}` and
/// returns the stored path together with the public URL. A failed write, or
/// a write whose public URL cannot be resolved, is an error carrying a
/// descriptive message.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn upload(&self, file: &SelectedFile, folder: &str) -> StorageResult<UploadResult>;

    /// Which backend this is, for logging.
    fn backend_type(&self) -> StorageBackend;
}

/// Build and validate the object key for one upload.
pub(crate) fn object_key(folder: &str, identifier: &str) -> StorageResult<String> {
    let key = format!("{}/{}", folder.trim_matches('/'), identifier);
    if key.contains("..") || key.starts_with('/') {
        return Err(StorageError::InvalidKey(
            "Storage key contains invalid characters".to_string(),
        ));
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_key_joins_folder_and_identifier() {
        assert_eq!(
            object_key("user-uploads", "1700_a.png").unwrap(),
            "user-uploads/1700_a.png"
        );
        assert_eq!(
            object_key("/user-uploads/", "1700_a.png").unwrap(),
            "user-uploads/1700_a.png"
        );
    }

    #[test]
    fn object_key_rejects_traversal() {
        assert!(matches!(
            object_key("user-uploads", "../escape"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
