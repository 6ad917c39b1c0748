// Report persistence seam

use anyhow::Result;
use std::path::PathBuf;

use super::types::Report;

/// Accepts a finished report and persists it. Called at most once per run.
pub trait ReportSink: Send + Sync {
    /// Write the report, returning where it ended up
    fn persist(&self, report: &Report) -> Result<PathBuf>;
}
