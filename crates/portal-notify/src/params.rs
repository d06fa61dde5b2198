//! Notification template parameters
//!
//! Builds the parameter mapping the email template expects from one
//! successful upload batch: sender details, a free-text message, an HTML and
//! a plain-text rendering of the uploaded-file list, the file count, and a
//! client-local timestamp.

use chrono::{DateTime, Local};
use portal_core::{format_file_size, UploadResult};
use serde::Serialize;

/// Parameter mapping sent to the notification template.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NotificationParams {
    pub to_name: String,
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub uploaded_files_html: String,
    pub uploaded_files_text: String,
    pub file_count: usize,
    pub upload_date: String,
}

impl NotificationParams {
    /// Build the parameter set for one upload batch.
    ///
    /// A blank message defaults to an auto-generated line naming the sender.
    pub fn build(
        to_name: &str,
        from_name: &str,
        from_email: &str,
        message: &str,
        uploads: &[UploadResult],
        sent_at: DateTime<Local>,
    ) -> Self {
        let message = if message.trim().is_empty() {
            format!("New file upload from {}", from_name)
        } else {
            message.trim().to_string()
        };

        NotificationParams {
            to_name: to_name.to_string(),
            from_name: from_name.to_string(),
            from_email: from_email.to_string(),
            message,
            uploaded_files_html: render_html_list(uploads),
            uploaded_files_text: render_text_list(uploads),
            file_count: uploads.len(),
            upload_date: sent_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

fn render_html_list(uploads: &[UploadResult]) -> String {
    uploads
        .iter()
        .map(|u| {
            format!(
                "<a href=\"{}\" style=\"color: #667eea; text-decoration: underline;\">{}</a> ({}, {})",
                u.public_url,
                u.file_name,
                format_file_size(u.file_size_bytes),
                u.media_type
            )
        })
        .collect::<Vec<_>>()
        .join("<br>")
}

fn render_text_list(uploads: &[UploadResult]) -> String {
    uploads
        .iter()
        .map(|u| format!("{}: {}", u.file_name, u.public_url))
        .collect::<Vec<_>>()
        .join("\n")
}
