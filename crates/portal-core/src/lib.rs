//! Portal core library
//!
//! Pure domain logic for the upload portal: file validation, the selection
//! store, presenter view-model helpers, configuration, and the shared error
//! type. Nothing in this crate performs I/O beyond reading configuration
//! from the environment.

pub mod config;
pub mod error;
pub mod models;
pub mod selection;
pub mod validation;
pub mod view_model;

pub use config::{Config, StorageBackend};
pub use error::AppError;
pub use models::{
    FileCandidate, Notice, SelectedFile, Severity, UploadResult, RESET_CLEAR_DELAY,
};
pub use selection::{AddOutcome, SelectionStore};
pub use validation::{validate, ValidationError, ALLOWED_MEDIA_TYPES, MAX_FILE_SIZE_BYTES};
pub use view_model::{format_file_size, FileRow};
