//! Submission orchestrator tests against fake storage, notifier, and view.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use portal_cli::submit::{SubmissionForm, SubmissionOutcome, SubmissionService};
use portal_cli::view::View;
use portal_core::{
    Config, FileCandidate, FileRow, Notice, SelectedFile, SelectionStore, Severity,
    StorageBackend, UploadResult,
};
use portal_notify::{DeliveryReceipt, NotificationParams, Notifier, NotifyError, NotifyResult};
use portal_storage::{Storage, StorageError, StorageResult};

#[derive(Default)]
struct FakeStorage {
    fail: bool,
    uploads: Mutex<Vec<String>>,
}

impl FakeStorage {
    fn failing() -> Self {
        FakeStorage {
            fail: true,
            ..Default::default()
        }
    }

    fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }
}

#[async_trait]
impl Storage for FakeStorage {
    async fn upload(&self, file: &SelectedFile, folder: &str) -> StorageResult<UploadResult> {
        self.uploads.lock().unwrap().push(file.name.clone());
        if self.fail {
            return Err(StorageError::UploadFailed(
                "simulated network error".to_string(),
            ));
        }
        Ok(UploadResult {
            stored_path: format!("{}/{}", folder, file.identifier),
            public_url: format!("http://cdn.test/{}", file.identifier),
            file_name: file.name.clone(),
            file_size_bytes: file.size_bytes,
            media_type: file.media_type.clone(),
        })
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

#[derive(Default)]
struct FakeNotifier {
    fail: bool,
    sent: Mutex<Vec<NotificationParams>>,
}

impl FakeNotifier {
    fn failing() -> Self {
        FakeNotifier {
            fail: true,
            ..Default::default()
        }
    }

    fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Notifier for FakeNotifier {
    async fn send(&self, params: &NotificationParams) -> NotifyResult<DeliveryReceipt> {
        if self.fail {
            return Err(NotifyError::SendFailed("simulated outage".to_string()));
        }
        self.sent.lock().unwrap().push(params.clone());
        Ok(DeliveryReceipt { status: 200 })
    }
}

#[derive(Default)]
struct RecordingView {
    notices: Vec<Notice>,
    busy_transitions: Vec<bool>,
    rendered_row_counts: Vec<usize>,
}

impl View for RecordingView {
    fn render_list(&mut self, rows: &[FileRow]) {
        self.rendered_row_counts.push(rows.len());
    }

    fn show_notice(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }

    fn set_busy(&mut self, busy: bool) {
        self.busy_transitions.push(busy);
    }
}

impl RecordingView {
    fn last_severity(&self) -> Option<Severity> {
        self.notices.last().map(|n| n.severity)
    }
}

fn test_config(require_email: bool) -> Config {
    Config {
        storage_backend: StorageBackend::Local,
        supabase: None,
        local: None,
        upload_folder: "user-uploads".to_string(),
        emailjs: None,
        recipient_name: "Uploads Team".to_string(),
        require_email,
    }
}

fn service(
    storage: &Arc<FakeStorage>,
    notifier: Option<&Arc<FakeNotifier>>,
    require_email: bool,
) -> SubmissionService {
    SubmissionService::new(
        storage.clone(),
        notifier.map(|n| n.clone() as Arc<dyn Notifier>),
        &test_config(require_email),
    )
}

fn form(name: &str, email: &str) -> SubmissionForm {
    SubmissionForm {
        applicant_name: name.to_string(),
        applicant_email: email.to_string(),
        message: String::new(),
    }
}

fn store_with_files(count: usize) -> SelectionStore {
    let mut store = SelectionStore::new();
    for i in 0..count {
        let outcome = store.add_at(
            FileCandidate {
                name: format!("file-{}.png", i),
                size_bytes: 100 + i as u64,
                media_type: "image/png".to_string(),
                last_modified_ms: 1_000 + i as i64,
                payload: Bytes::from_static(b"bytes"),
            },
            1_700_000_000_000 + i as i64,
        );
        assert!(matches!(outcome, portal_core::AddOutcome::Added { .. }));
    }
    store
}

#[tokio::test]
async fn blank_applicant_name_issues_no_network_calls() {
    let storage = Arc::new(FakeStorage::default());
    let notifier = Arc::new(FakeNotifier::default());
    let svc = service(&storage, Some(&notifier), false);
    let mut store = store_with_files(2);
    let mut view = RecordingView::default();

    let outcome = svc
        .submit(&form("   ", "a@example.com"), &mut store, &mut view)
        .await;

    assert_eq!(outcome, SubmissionOutcome::Rejected);
    assert_eq!(storage.upload_count(), 0);
    assert_eq!(notifier.sent_count(), 0);
    assert_eq!(view.last_severity(), Some(Severity::Error));
    assert!(view.busy_transitions.is_empty());
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn blank_email_blocks_when_required() {
    let storage = Arc::new(FakeStorage::default());
    let notifier = Arc::new(FakeNotifier::default());
    let svc = service(&storage, Some(&notifier), true);
    let mut store = store_with_files(1);
    let mut view = RecordingView::default();

    let outcome = svc.submit(&form("Alice", "  "), &mut store, &mut view).await;

    assert_eq!(outcome, SubmissionOutcome::Rejected);
    assert_eq!(storage.upload_count(), 0);
    assert_eq!(notifier.sent_count(), 0);
}

#[tokio::test]
async fn blank_email_is_fine_when_not_required() {
    let storage = Arc::new(FakeStorage::default());
    let svc = service(&storage, None, false);
    let mut store = store_with_files(1);
    let mut view = RecordingView::default();

    let outcome = svc.submit(&form("Alice", ""), &mut store, &mut view).await;

    assert_eq!(
        outcome,
        SubmissionOutcome::Completed {
            files: 1,
            notified: false
        }
    );
}

#[tokio::test]
async fn empty_selection_blocks_submission() {
    let storage = Arc::new(FakeStorage::default());
    let notifier = Arc::new(FakeNotifier::default());
    let svc = service(&storage, Some(&notifier), false);
    let mut store = SelectionStore::new();
    let mut view = RecordingView::default();

    let outcome = svc
        .submit(&form("Alice", "a@example.com"), &mut store, &mut view)
        .await;

    assert_eq!(outcome, SubmissionOutcome::Rejected);
    assert_eq!(storage.upload_count(), 0);
    assert_eq!(notifier.sent_count(), 0);
}

#[tokio::test]
async fn upload_failure_aborts_before_notify_and_keeps_the_selection() {
    let storage = Arc::new(FakeStorage::failing());
    let notifier = Arc::new(FakeNotifier::default());
    let svc = service(&storage, Some(&notifier), false);
    let mut store = store_with_files(1);
    let mut view = RecordingView::default();

    let outcome = svc
        .submit(&form("Alice", "a@example.com"), &mut store, &mut view)
        .await;

    assert_eq!(outcome, SubmissionOutcome::UploadFailed);
    assert_eq!(notifier.sent_count(), 0);
    assert_eq!(store.len(), 1, "failed attempt must not clear the store");
    assert_eq!(view.last_severity(), Some(Severity::Error));
    assert_eq!(
        view.busy_transitions,
        vec![true, false],
        "busy indicator must be restored on the failure path"
    );
}

#[tokio::test]
async fn successful_batch_sends_exactly_one_notification_with_all_entries() {
    let storage = Arc::new(FakeStorage::default());
    let notifier = Arc::new(FakeNotifier::default());
    let svc = service(&storage, Some(&notifier), true);
    let mut store = store_with_files(3);
    let mut view = RecordingView::default();

    let outcome = svc
        .submit(&form("Alice", "a@example.com"), &mut store, &mut view)
        .await;

    assert_eq!(
        outcome,
        SubmissionOutcome::Completed {
            files: 3,
            notified: true
        }
    );
    assert_eq!(storage.upload_count(), 3);
    assert_eq!(notifier.sent_count(), 1);

    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent[0].file_count, 3);
    assert_eq!(sent[0].uploaded_files_text.lines().count(), 3);
    assert_eq!(sent[0].from_name, "Alice");
    assert_eq!(sent[0].to_name, "Uploads Team");

    assert!(store.is_empty(), "store resets after full success");
    assert_eq!(view.rendered_row_counts.last(), Some(&0));
    assert_eq!(view.busy_transitions, vec![true, false]);
}

#[tokio::test]
async fn failing_notification_still_reports_success_and_empties_the_store() {
    let storage = Arc::new(FakeStorage::default());
    let notifier = Arc::new(FakeNotifier::failing());
    let svc = service(&storage, Some(&notifier), true);
    let mut store = store_with_files(2);
    let mut view = RecordingView::default();

    let outcome = svc
        .submit(&form("Alice", "a@example.com"), &mut store, &mut view)
        .await;

    assert_eq!(
        outcome,
        SubmissionOutcome::Completed {
            files: 2,
            notified: false
        }
    );
    assert!(store.is_empty());
    // The notify failure is swallowed: the last user-visible notice is the
    // upload success, not an error.
    assert_eq!(view.last_severity(), Some(Severity::Success));
}

#[tokio::test]
async fn unconfigured_notifier_skips_the_notification_step() {
    let storage = Arc::new(FakeStorage::default());
    let svc = service(&storage, None, false);
    let mut store = store_with_files(1);
    let mut view = RecordingView::default();

    let outcome = svc.submit(&form("Alice", ""), &mut store, &mut view).await;

    assert_eq!(
        outcome,
        SubmissionOutcome::Completed {
            files: 1,
            notified: false
        }
    );
    assert!(store.is_empty());
}
