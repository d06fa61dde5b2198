//! EmailJS backend
//!
//! Dispatches the notification through the EmailJS REST API:
//! `POST /api/v1.0/email/send` with the service key, template key, public
//! key, and the template parameter mapping.

use portal_core::config::EmailJsConfig;
use serde::Serialize;
use std::time::Duration;

use async_trait::async_trait;

use crate::params::NotificationParams;
use crate::traits::{DeliveryReceipt, Notifier, NotifyError, NotifyResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Wire body for the EmailJS send endpoint.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a NotificationParams,
}

/// EmailJS notifier implementation
#[derive(Clone)]
pub struct EmailJsNotifier {
    client: reqwest::Client,
    service_id: String,
    template_id: String,
    public_key: String,
    endpoint: String,
}

impl EmailJsNotifier {
    pub fn new(config: &EmailJsConfig) -> NotifyResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| NotifyError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(EmailJsNotifier {
            client,
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl Notifier for EmailJsNotifier {
    async fn send(&self, params: &NotificationParams) -> NotifyResult<DeliveryReceipt> {
        let body = SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: params,
        };

        tracing::debug!(
            file_count = params.file_count,
            from_name = %params.from_name,
            "Sending email notification"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| NotifyError::SendFailed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(NotifyError::SendFailed(format!(
                "EmailJS responded with status {}: {}",
                status, text
            )));
        }

        tracing::info!(file_count = params.file_count, "Email notification sent");

        Ok(DeliveryReceipt {
            status: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[test]
    fn send_request_serializes_the_emailjs_wire_shape() {
        let params = NotificationParams::build(
            "Team",
            "Alice",
            "alice@example.com",
            "",
            &[],
            Local::now(),
        );
        let body = SendRequest {
            service_id: "service_x",
            template_id: "template_y",
            user_id: "key_z",
            template_params: &params,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["service_id"], "service_x");
        assert_eq!(json["template_id"], "template_y");
        assert_eq!(json["user_id"], "key_z");
        assert_eq!(json["template_params"]["file_count"], 0);
        assert_eq!(
            json["template_params"]["message"],
            "New file upload from Alice"
        );
    }
}
