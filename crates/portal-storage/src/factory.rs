#[cfg(feature = "storage-local")]
use crate::LocalStorage;
#[cfg(feature = "storage-supabase")]
use crate::SupabaseStorage;
use crate::{Storage, StorageBackend, StorageError, StorageResult};
use portal_core::Config;
use std::sync::Arc;

/// Create a storage backend based on configuration
pub async fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    match config.storage_backend {
        #[cfg(feature = "storage-supabase")]
        StorageBackend::Supabase => {
            let supabase = config.supabase.as_ref().ok_or_else(|| {
                StorageError::ConfigError(
                    "SUPABASE_URL and SUPABASE_ANON_KEY not configured".to_string(),
                )
            })?;
            let storage = SupabaseStorage::new(supabase)?;
            Ok(Arc::new(storage))
        }

        #[cfg(not(feature = "storage-supabase"))]
        StorageBackend::Supabase => Err(StorageError::ConfigError(
            "Supabase storage backend not available (storage-supabase feature not enabled)"
                .to_string(),
        )),

        #[cfg(feature = "storage-local")]
        StorageBackend::Local => {
            let local = config.local.as_ref().ok_or_else(|| {
                StorageError::ConfigError(
                    "LOCAL_STORAGE_PATH and LOCAL_STORAGE_BASE_URL not configured".to_string(),
                )
            })?;
            let storage = LocalStorage::new(local).await?;
            Ok(Arc::new(storage))
        }

        #[cfg(not(feature = "storage-local"))]
        StorageBackend::Local => Err(StorageError::ConfigError(
            "Local storage backend not available (storage-local feature not enabled)".to_string(),
        )),
    }
}
