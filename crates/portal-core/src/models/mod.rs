//! Domain models for the upload portal.

mod notice;
mod selected_file;
mod upload;

pub use notice::{Notice, Severity, RESET_CLEAR_DELAY};
pub use selected_file::{sanitize_file_name, FileCandidate, SelectedFile};
pub use upload::UploadResult;
