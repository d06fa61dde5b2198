//! File-candidate loading
//!
//! Turns a path on disk into a `FileCandidate`: the payload bytes, the size
//! and modification time from metadata, and a media type declared from the
//! extension. Unknown extensions pass through as `application/octet-stream`
//! and are rejected by the validator like any other unsupported type.

use std::path::Path;
use std::time::UNIX_EPOCH;

use bytes::Bytes;
use portal_core::{AppError, FileCandidate};

/// Declared media type for a path, by extension.
pub fn media_type_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// Read a candidate file from disk.
pub fn load_candidate(path: &Path) -> Result<FileCandidate, AppError> {
    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(AppError::InvalidInput(format!(
            "Not a regular file: {}",
            path.display()
        )));
    }

    let last_modified_ms = metadata
        .modified()
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0);

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid file name: {}", path.display())))?
        .to_string();

    let payload = Bytes::from(std::fs::read(path)?);

    Ok(FileCandidate {
        name,
        size_bytes: metadata.len(),
        media_type: media_type_for_path(path).to_string(),
        last_modified_ms,
        payload,
    })
}
