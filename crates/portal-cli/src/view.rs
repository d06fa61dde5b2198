//! View abstraction
//!
//! The orchestrator talks to the rendering surface through this capability
//! set only (render the file list, show a notice, toggle the busy state), so
//! it can be exercised in tests without a terminal.

use portal_core::{FileRow, Notice, Severity};

/// Rendering capabilities the submission workflow needs.
pub trait View {
    /// Render the current selection list, in store order. An empty slice
    /// means the placeholder should be shown.
    fn render_list(&mut self, rows: &[FileRow]);

    /// Show a transient status notice, replacing any previous one.
    fn show_notice(&mut self, notice: &Notice);

    /// Toggle the busy indicator; while busy, submission is disabled.
    fn set_busy(&mut self, busy: bool);
}

/// Plain console renderer.
///
/// Notices are printed with a severity tag. The auto-dismiss policy on
/// `Notice` does not apply here since printed lines cannot be retracted.
#[derive(Debug, Default)]
pub struct ConsoleView;

impl ConsoleView {
    pub fn new() -> Self {
        ConsoleView
    }
}

impl View for ConsoleView {
    fn render_list(&mut self, rows: &[FileRow]) {
        if rows.is_empty() {
            println!("No files selected");
            return;
        }
        for row in rows {
            println!(
                "  [{}] {}  {} \u{2022} {}  (ID: {})",
                row.id, row.name, row.size_display, row.type_display, row.identifier
            );
        }
    }

    fn show_notice(&mut self, notice: &Notice) {
        let tag = match notice.severity {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        };
        println!("[{}] {}", tag, notice.message);
    }

    fn set_busy(&mut self, busy: bool) {
        if busy {
            println!("Uploading...");
        }
    }
}
