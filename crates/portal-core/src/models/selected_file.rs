use bytes::Bytes;

/// A file picked by the user, before validation and de-duplication.
///
/// `name`, `size_bytes`, `media_type`, and `last_modified_ms` are copied
/// verbatim from the underlying file handle at selection time. The declared
/// media type is trusted as-is; no byte sniffing happens anywhere.
#[derive(Debug, Clone)]
pub struct FileCandidate {
    pub name: String,
    pub size_bytes: u64,
    pub media_type: String,
    /// Modification timestamp in milliseconds since the Unix epoch.
    pub last_modified_ms: i64,
    pub payload: Bytes,
}

/// An accepted file pending submission. Immutable after creation.
///
/// The payload reference is released when the record is removed or the
/// selection store is reset after a successful submission.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    /// Session-local id, monotonically increasing from 1, never reused
    /// after removal. Insertion order equals display order.
    pub id: u64,
    /// External-facing key sent alongside the upload:
    /// `"{add_time_ms}_{sanitized_name}"`.
    pub identifier: String,
    pub name: String,
    pub size_bytes: u64,
    pub media_type: String,
    pub last_modified_ms: i64,
    pub payload: Bytes,
}

impl SelectedFile {
    /// The de-duplication key: two picks of the same underlying file share
    /// name, size, and modification timestamp.
    pub fn dedup_key(&self) -> (&str, u64, i64) {
        (&self.name, self.size_bytes, self.last_modified_ms)
    }

    pub(crate) fn from_candidate(candidate: FileCandidate, id: u64, added_at_ms: i64) -> Self {
        let identifier = format!("{}_{}", added_at_ms, sanitize_file_name(&candidate.name));
        SelectedFile {
            id,
            identifier,
            name: candidate.name,
            size_bytes: candidate.size_bytes,
            media_type: candidate.media_type,
            last_modified_ms: candidate.last_modified_ms,
            payload: candidate.payload,
        }
    }
}

/// Replace every character outside `[A-Za-z0-9.-]` with `_` so the name is
/// safe to use as a storage object key.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
