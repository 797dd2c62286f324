//! Report View - platform statistics for admins
//!
//! Read-only. Every key except the globals is ignored here.

mod render;

use crate::directory::PlatformReport;

/// Report View state
#[derive(Debug, Default)]
pub struct ReportView {
    /// Loaded statistics; `None` until an admin opens the view
    pub report: Option<PlatformReport>,
}

impl ReportView {
    /// Create a new ReportView
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed statistics
    pub fn set_report(&mut self, report: PlatformReport) {
        self.report = Some(report);
    }
}
