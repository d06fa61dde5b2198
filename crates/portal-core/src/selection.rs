//! Selection store
//!
//! In-memory ordered collection of validated files pending submission.
//! Owned by whatever composes the UI; all mutation goes through the methods
//! here so the orchestrator and tests never touch free-floating state.
//! Lifecycle is bound to the session: nothing persists across restarts.

use chrono::Utc;

use crate::models::{FileCandidate, SelectedFile};
use crate::validation::{validate, ValidationError};
use crate::view_model::FileRow;

/// Result of attempting to add one candidate file.
///
/// Rejections and duplicates are recoverable per-file notices, not errors:
/// they never block sibling files in the same pick batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added { id: u64, name: String },
    Rejected { name: String, reason: ValidationError },
    Duplicate { name: String },
}

/// Ordered store of accepted files, each tagged with a session-local id.
#[derive(Debug, Default)]
pub struct SelectionStore {
    files: Vec<SelectedFile>,
    next_id: u64,
}

impl SelectionStore {
    pub fn new() -> Self {
        SelectionStore {
            files: Vec::new(),
            next_id: 1,
        }
    }

    /// Validate and add one candidate. On acceptance the file is appended in
    /// insertion order with the next id and a freshly generated identifier.
    pub fn add(&mut self, candidate: FileCandidate) -> AddOutcome {
        self.add_at(candidate, Utc::now().timestamp_millis())
    }

    /// `add` with an explicit capture timestamp, for deterministic tests.
    pub fn add_at(&mut self, candidate: FileCandidate, added_at_ms: i64) -> AddOutcome {
        if let Err(reason) = validate(&candidate.media_type, candidate.size_bytes) {
            return AddOutcome::Rejected {
                name: candidate.name,
                reason,
            };
        }

        let key = (
            candidate.name.as_str(),
            candidate.size_bytes,
            candidate.last_modified_ms,
        );
        if self.files.iter().any(|f| f.dedup_key() == key) {
            return AddOutcome::Duplicate {
                name: candidate.name,
            };
        }

        let id = self.next_id;
        self.next_id += 1;
        let file = SelectedFile::from_candidate(candidate, id, added_at_ms);
        let name = file.name.clone();
        self.files.push(file);
        AddOutcome::Added { id, name }
    }

    /// Remove the record with the given id, returning it so the caller can
    /// report the removed file's name. Silent no-op when the id is absent.
    /// Ids of the remaining records are untouched.
    pub fn remove(&mut self, id: u64) -> Option<SelectedFile> {
        let index = self.files.iter().position(|f| f.id == id)?;
        Some(self.files.remove(index))
    }

    /// Drop every record and reset the id counter to 1. Called after a fully
    /// successful submission and on manual form reset.
    pub fn clear(&mut self) {
        self.files.clear();
        self.next_id = 1;
    }

    /// Current records in insertion order.
    pub fn list(&self) -> &[SelectedFile] {
        &self.files
    }

    /// Presenter rows for the current records, in insertion order.
    pub fn rows(&self) -> Vec<FileRow> {
        self.files.iter().map(FileRow::from).collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
