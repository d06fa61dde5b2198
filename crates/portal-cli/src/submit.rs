//! Submission orchestrator
//!
//! Drives one submission attempt: required-field checks, the per-file upload
//! fan-out, the single best-effort notification, and the store reset. All
//! user feedback goes through the `View`; the busy indicator is restored on
//! every exit path once entered.

use std::sync::Arc;

use chrono::Local;
use futures::future::try_join_all;
use portal_core::{Config, Notice, SelectionStore};
use portal_notify::{NotificationParams, Notifier};
use portal_storage::Storage;

use crate::view::View;

/// Trimmed-on-read textual fields of the form.
#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    pub applicant_name: String,
    pub applicant_email: String,
    pub message: String,
}

/// How one submission attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// A required field was blank or no files were selected. No network
    /// calls were made.
    Rejected,
    /// At least one upload failed; the attempt was aborted, the selection
    /// kept, and no notification issued. Partial uploads are not rolled back.
    UploadFailed,
    /// Every upload succeeded and the store was reset. `notified` is false
    /// when the notifier was unconfigured or its call failed (best-effort).
    Completed { files: usize, notified: bool },
}

/// Orchestrates submit attempts against a blob store and an optional
/// notifier.
pub struct SubmissionService {
    storage: Arc<dyn Storage>,
    notifier: Option<Arc<dyn Notifier>>,
    upload_folder: String,
    recipient_name: String,
    require_email: bool,
}

impl SubmissionService {
    pub fn new(
        storage: Arc<dyn Storage>,
        notifier: Option<Arc<dyn Notifier>>,
        config: &Config,
    ) -> Self {
        SubmissionService {
            storage,
            notifier,
            upload_folder: config.upload_folder.clone(),
            recipient_name: config.recipient_name.clone(),
            require_email: config.require_email,
        }
    }

    /// Run one submission attempt. On full success the store is cleared and
    /// the emptied list re-rendered; the caller resets its own form fields.
    pub async fn submit(
        &self,
        form: &SubmissionForm,
        store: &mut SelectionStore,
        view: &mut dyn View,
    ) -> SubmissionOutcome {
        let name = form.applicant_name.trim();
        if name.is_empty() {
            view.show_notice(&Notice::error("Please enter your name."));
            return SubmissionOutcome::Rejected;
        }

        let email = form.applicant_email.trim();
        if self.require_email && email.is_empty() {
            view.show_notice(&Notice::error("Please enter your email address."));
            return SubmissionOutcome::Rejected;
        }

        if store.is_empty() {
            view.show_notice(&Notice::error("Please select at least one file."));
            return SubmissionOutcome::Rejected;
        }

        view.set_busy(true);
        let outcome = self
            .upload_and_notify(name, email, form.message.trim(), store, view)
            .await;
        view.set_busy(false);
        outcome
    }

    async fn upload_and_notify(
        &self,
        name: &str,
        email: &str,
        message: &str,
        store: &mut SelectionStore,
        view: &mut dyn View,
    ) -> SubmissionOutcome {
        // Fan-out: every upload request is issued before any result is
        // awaited; a single failure aborts the attempt without rollback.
        let uploads = try_join_all(
            store
                .list()
                .iter()
                .map(|file| self.storage.upload(file, &self.upload_folder)),
        )
        .await;

        let uploads = match uploads {
            Ok(uploads) => uploads,
            Err(e) => {
                tracing::error!(error = %e, files = store.len(), "Upload batch failed");
                view.show_notice(&Notice::error(format!("Upload failed: {}", e)));
                return SubmissionOutcome::UploadFailed;
            }
        };

        view.show_notice(&Notice::success("Files uploaded successfully!"));

        let mut notified = false;
        if let Some(notifier) = &self.notifier {
            let params = NotificationParams::build(
                &self.recipient_name,
                name,
                email,
                message,
                &uploads,
                Local::now(),
            );
            match notifier.send(&params).await {
                Ok(receipt) => {
                    notified = true;
                    tracing::debug!(status = receipt.status, "Delivery receipt received");
                    view.show_notice(&Notice::success("Email notification sent successfully!"));
                }
                Err(e) => {
                    // Best-effort: the upload obligation is already met, so
                    // a failed notification never changes the outcome.
                    tracing::warn!(error = %e, "Email notification failed, but upload was successful");
                }
            }
        }

        let files = uploads.len();
        store.clear();
        view.render_list(&store.rows());

        SubmissionOutcome::Completed { files, notified }
    }
}
