//! Notifier abstraction trait

use async_trait::async_trait;

use crate::params::NotificationParams;

/// Notification dispatch errors
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Send failed: {0}")]
    SendFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for notification operations
pub type NotifyResult<T> = Result<T, NotifyError>;

/// Proof of dispatch returned by the delivery backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub status: u16,
}

/// Templated-message dispatch service.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, params: &NotificationParams) -> NotifyResult<DeliveryReceipt>;
}
