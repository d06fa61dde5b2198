//! File validation
//!
//! Pure acceptance check for a candidate file's declared media type and byte
//! size. The media type is matched exactly against a fixed allow-set; the
//! actual bytes are never inspected.

/// Maximum accepted file size: 32 MiB.
pub const MAX_FILE_SIZE_BYTES: u64 = 32 * 1024 * 1024;

/// Declared MIME types accepted by the portal.
pub const ALLOWED_MEDIA_TYPES: [&str; 4] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "application/pdf",
];

/// Why a candidate file was rejected. The messages are user-facing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Only JPG, PNG, and PDF files are allowed.")]
    UnsupportedType { media_type: String },

    #[error("File size must be 32MB or less.")]
    TooLarge { size_bytes: u64 },
}

/// Validate a candidate file. Deterministic, no side effects.
///
/// The type check runs first so a file that is both oversized and of an
/// unsupported type reports the more actionable type error.
pub fn validate(media_type: &str, size_bytes: u64) -> Result<(), ValidationError> {
    if !ALLOWED_MEDIA_TYPES.contains(&media_type) {
        return Err(ValidationError::UnsupportedType {
            media_type: media_type.to_string(),
        });
    }

    if size_bytes > MAX_FILE_SIZE_BYTES {
        return Err(ValidationError::TooLarge { size_bytes });
    }

    Ok(())
}
