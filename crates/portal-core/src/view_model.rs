//! Presenter view-model helpers
//!
//! Pure rendering data for the file list so frontends never reach into the
//! selection store's records directly.

use crate::models::SelectedFile;

/// One row of the rendered file list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRow {
    pub id: u64,
    pub name: String,
    /// Human-readable size, e.g. `1.5 MB`.
    pub size_display: String,
    /// Uppercased subtype of the media type, e.g. `PNG` for `image/png`.
    pub type_display: String,
    pub identifier: String,
}

impl From<&SelectedFile> for FileRow {
    fn from(file: &SelectedFile) -> Self {
        FileRow {
            id: file.id,
            name: file.name.clone(),
            size_display: format_file_size(file.size_bytes),
            type_display: media_subtype_display(&file.media_type),
            identifier: file.identifier.clone(),
        }
    }
}

/// Uppercase the segment after the `/` in a MIME type.
fn media_subtype_display(media_type: &str) -> String {
    media_type
        .rsplit('/')
        .next()
        .unwrap_or(media_type)
        .to_uppercase()
}

/// Format a byte count with base-1024 units, two decimal places, trailing
/// zeros trimmed. Zero renders as `0 Bytes`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let scaled = bytes as f64 / 1024_f64.powi(exponent as i32);

    let mut value = format!("{:.2}", scaled);
    if value.contains('.') {
        value = value
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string();
    }

    format!("{} {}", value, UNITS[exponent])
}
