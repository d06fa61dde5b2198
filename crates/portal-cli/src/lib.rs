//! Portal CLI — terminal frontend for the upload portal.
//!
//! Hosts the submission orchestrator, the `View` abstraction with its
//! console renderer, file-candidate loading, and the persisted theme
//! preference. The binary wires these together from configuration.

pub mod files;
pub mod prefs;
pub mod submit;
pub mod view;

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
