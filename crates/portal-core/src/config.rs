//! Configuration module
//!
//! Env-driven configuration for the portal: storage backend selection,
//! Supabase and local-storage settings, EmailJS credentials, and the form
//! variant flags. A `.env` file is honored via `dotenvy`.

use std::env;

use crate::error::AppError;

/// Which blob-store backend uploads go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Supabase,
    Local,
}

/// Supabase Storage settings (`storage-supabase` backend).
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co`.
    pub url: String,
    pub anon_key: String,
    pub bucket: String,
}

/// Local filesystem settings (`storage-local` backend).
#[derive(Debug, Clone)]
pub struct LocalStorageConfig {
    pub base_path: String,
    pub base_url: String,
}

/// EmailJS settings. Notifications are enabled only when all three
/// credentials are present; otherwise the notify step is skipped entirely.
#[derive(Debug, Clone)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// API endpoint override, mainly for tests.
    pub endpoint: String,
}

pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Full portal configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage_backend: StorageBackend,
    pub supabase: Option<SupabaseConfig>,
    pub local: Option<LocalStorageConfig>,
    /// Folder (key prefix) uploads are stored under.
    pub upload_folder: String,
    pub emailjs: Option<EmailJsConfig>,
    /// Recipient display name used in the notification template.
    pub recipient_name: String,
    /// Whether the applicant email field is required at submit time.
    pub require_email: bool,
}

impl Config {
    /// Load configuration from the environment (and `.env` when present).
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let storage_backend = match env::var("STORAGE_BACKEND").as_deref() {
            Ok("local") => StorageBackend::Local,
            Ok("supabase") | Err(_) => StorageBackend::Supabase,
            Ok(other) => {
                return Err(AppError::Config(format!(
                    "Unknown STORAGE_BACKEND '{}'. Must be 'supabase' or 'local'",
                    other
                )))
            }
        };

        let supabase = match (env::var("SUPABASE_URL"), env::var("SUPABASE_ANON_KEY")) {
            (Ok(url), Ok(anon_key)) => Some(SupabaseConfig {
                url: url.trim_end_matches('/').to_string(),
                anon_key,
                bucket: env::var("SUPABASE_BUCKET").unwrap_or_else(|_| "uploads".to_string()),
            }),
            _ => None,
        };

        let local = match (
            env::var("LOCAL_STORAGE_PATH"),
            env::var("LOCAL_STORAGE_BASE_URL"),
        ) {
            (Ok(base_path), Ok(base_url)) => Some(LocalStorageConfig {
                base_path,
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
            _ => None,
        };

        match storage_backend {
            StorageBackend::Supabase if supabase.is_none() => {
                return Err(AppError::Config(
                    "Supabase backend requires SUPABASE_URL and SUPABASE_ANON_KEY".to_string(),
                ));
            }
            StorageBackend::Local if local.is_none() => {
                return Err(AppError::Config(
                    "Local backend requires LOCAL_STORAGE_PATH and LOCAL_STORAGE_BASE_URL"
                        .to_string(),
                ));
            }
            _ => {}
        }

        let emailjs = match (
            env::var("EMAILJS_SERVICE_ID"),
            env::var("EMAILJS_TEMPLATE_ID"),
            env::var("EMAILJS_PUBLIC_KEY"),
        ) {
            (Ok(service_id), Ok(template_id), Ok(public_key)) => Some(EmailJsConfig {
                service_id,
                template_id,
                public_key,
                endpoint: env::var("EMAILJS_ENDPOINT")
                    .unwrap_or_else(|_| DEFAULT_EMAILJS_ENDPOINT.to_string()),
            }),
            _ => None,
        };

        // The minimal and extended form variants are one flag pair: the
        // email field defaults to required exactly when notifications are on.
        let require_email = match env::var("REQUIRE_APPLICANT_EMAIL").as_deref() {
            Ok(value) => parse_bool("REQUIRE_APPLICANT_EMAIL", value)?,
            Err(_) => emailjs.is_some(),
        };

        Ok(Config {
            storage_backend,
            supabase,
            local,
            upload_folder: env::var("UPLOAD_FOLDER")
                .unwrap_or_else(|_| "user-uploads".to_string()),
            emailjs,
            recipient_name: env::var("RECIPIENT_NAME")
                .unwrap_or_else(|_| "Uploads Team".to_string()),
            require_email,
        })
    }

    pub fn notifications_enabled(&self) -> bool {
        self.emailjs.is_some()
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, AppError> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(AppError::Config(format!(
            "{} must be a boolean, got '{}'",
            name, other
        ))),
    }
}
