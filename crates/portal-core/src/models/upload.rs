use serde::{Deserialize, Serialize};

/// Result of storing one file in the blob store.
///
/// Lives for a single submission cycle: produced by the upload fan-out,
/// consumed by the notification step, then discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResult {
    /// Backend path the object was stored under (e.g. `user-uploads/…`).
    pub stored_path: String,
    /// Publicly resolvable URL for the stored object.
    pub public_url: String,
    pub file_name: String,
    pub file_size_bytes: u64,
    pub media_type: String,
}
