//! Portal Storage Library
//!
//! Blob-store abstraction and backends for the upload portal. The `Storage`
//! trait takes a selected file plus a destination folder and returns the
//! stored path and a publicly resolvable URL.
//!
//! # Object key format
//!
//! All backends store a file under `{folder}/{identifier}` where the
//! identifier is the selection-time key (`{timestamp}_{sanitized_name}`).
//! Keys must not contain `..` or a leading `/`.

pub mod factory;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-supabase")]
pub mod supabase;
pub mod traits;

pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use portal_core::StorageBackend;
#[cfg(feature = "storage-supabase")]
pub use supabase::SupabaseStorage;
pub use traits::{Storage, StorageError, StorageResult};
