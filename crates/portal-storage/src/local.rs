//! Local filesystem backend
//!
//! Writes uploads under a base directory and serves them from a configured
//! base URL. Used for development and tests in place of a remote blob store.

use async_trait::async_trait;
use portal_core::{config::LocalStorageConfig, SelectedFile, StorageBackend, UploadResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::traits::{object_key, Storage, StorageError, StorageResult};

/// Local filesystem storage implementation
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
    base_url: String,
}

impl LocalStorage {
    pub async fn new(config: &LocalStorageConfig) -> StorageResult<Self> {
        let base_path = PathBuf::from(&config.base_path);

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage {
            base_path,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn key_to_path(&self, key: &str) -> PathBuf {
        self.base_path.join(key)
    }

    fn generate_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }

    async fn ensure_parent_dir(&self, path: &Path) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn upload(&self, file: &SelectedFile, folder: &str) -> StorageResult<UploadResult> {
        let key = object_key(folder, &file.identifier)?;
        let path = self.key_to_path(&key);

        self.ensure_parent_dir(&path).await?;

        let mut out = fs::File::create(&path)
            .await
            .map_err(|e| StorageError::UploadFailed(format!("Failed to create file: {}", e)))?;
        out.write_all(&file.payload)
            .await
            .map_err(|e| StorageError::UploadFailed(format!("Failed to write file: {}", e)))?;
        out.flush()
            .await
            .map_err(|e| StorageError::UploadFailed(format!("Failed to flush file: {}", e)))?;

        let public_url = self.generate_url(&key);

        tracing::info!(
            file_name = %file.name,
            key = %key,
            size = file.size_bytes,
            "Stored file locally"
        );

        Ok(UploadResult {
            stored_path: key,
            public_url,
            file_name: file.name.clone(),
            file_size_bytes: file.size_bytes,
            media_type: file.media_type.clone(),
        })
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn selected(name: &str, identifier: &str, payload: &'static [u8]) -> SelectedFile {
        SelectedFile {
            id: 1,
            identifier: identifier.to_string(),
            name: name.to_string(),
            size_bytes: payload.len() as u64,
            media_type: "image/png".to_string(),
            last_modified_ms: 0,
            payload: Bytes::from_static(payload),
        }
    }

    #[tokio::test]
    async fn upload_writes_the_payload_and_returns_the_public_url() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(&LocalStorageConfig {
            base_path: dir.path().to_string_lossy().into_owned(),
            base_url: "http://localhost:3000/media".to_string(),
        })
        .await
        .unwrap();

        let file = selected("a.png", "1700_a.png", b"png bytes");
        let result = storage.upload(&file, "user-uploads").await.unwrap();

        assert_eq!(result.stored_path, "user-uploads/1700_a.png");
        assert_eq!(
            result.public_url,
            "http://localhost:3000/media/user-uploads/1700_a.png"
        );
        assert_eq!(result.file_name, "a.png");
        assert_eq!(result.file_size_bytes, 9);

        let written = std::fs::read(dir.path().join("user-uploads/1700_a.png")).unwrap();
        assert_eq!(written, b"png bytes");
    }

    #[tokio::test]
    async fn traversal_identifiers_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(&LocalStorageConfig {
            base_path: dir.path().to_string_lossy().into_owned(),
            base_url: "http://localhost:3000/media".to_string(),
        })
        .await
        .unwrap();

        let file = selected("a.png", "../escape.png", b"x");
        assert!(matches!(
            storage.upload(&file, "user-uploads").await,
            Err(StorageError::InvalidKey(_))
        ));
    }
}
