//! Supabase Storage backend
//!
//! Uploads objects through the Supabase Storage REST API and resolves their
//! public URLs. The anon key is sent both as a bearer token and as the
//! `apikey` header, matching the official client.

use async_trait::async_trait;
use portal_core::{config::SupabaseConfig, SelectedFile, StorageBackend, UploadResult};
use std::time::Duration;

use crate::traits::{object_key, Storage, StorageError, StorageResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Supabase Storage implementation
#[derive(Clone)]
pub struct SupabaseStorage {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
    bucket: String,
}

impl SupabaseStorage {
    pub fn new(config: &SupabaseConfig) -> StorageResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| StorageError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(SupabaseStorage {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
            bucket: config.bucket.clone(),
        })
    }

    /// `POST {base}/storage/v1/object/{bucket}/{key}` target.
    fn upload_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url,
            self.bucket,
            encode_key(key)
        )
    }

    /// Public URL for a stored object.
    fn public_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url,
            self.bucket,
            encode_key(key)
        )
    }
}

/// Percent-encode each path segment, keeping the `/` separators.
fn encode_key(key: &str) -> String {
    key.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[async_trait]
impl Storage for SupabaseStorage {
    async fn upload(&self, file: &SelectedFile, folder: &str) -> StorageResult<UploadResult> {
        let key = object_key(folder, &file.identifier)?;
        let url = self.upload_url(&key);

        tracing::debug!(
            file_name = %file.name,
            key = %key,
            size = file.size_bytes,
            "Uploading to Supabase Storage"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.anon_key)
            .header("apikey", &self.anon_key)
            .header("Content-Type", &file.media_type)
            .body(file.payload.clone())
            .send()
            .await
            .map_err(|e| StorageError::UploadFailed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StorageError::UploadFailed(format!(
                "Backend rejected the write with status {}: {}",
                status, body
            )));
        }

        let public_url = self.public_url(&key);

        tracing::info!(
            file_name = %file.name,
            key = %key,
            public_url = %public_url,
            "Upload to Supabase Storage successful"
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
        StorageBackend::Supabase
    }
}
