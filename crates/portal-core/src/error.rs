//! Error types module
//!
//! Orchestrator-level errors are unified under `AppError`. Per-file
//! validation failures use `ValidationError` (see `validation`) and never
//! escalate past the add-file step; storage and notifier backends define
//! their own error enums and are mapped into `AppError` at the call site.

/// Application-level error for the submission workflow.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Notification error: {0}")]
    Notify(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
