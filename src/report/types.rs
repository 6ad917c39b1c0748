// Report structure handed to a sink

use chrono::{DateTime, Utc};

/// One titled block of the report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub heading: String,
    pub body: String,
    /// Line spacing multiple for the body (1.0 = single)
    pub line_spacing: f32,
}

/// The finished assessment report. Built once by the assembler and not
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct Report {
    pub title: String,
    pub sections: Vec<ReportSection>,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    /// Find a section by its heading
    pub fn section(&self, heading: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.heading == heading)
    }

    pub fn headings(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.heading.as_str()).collect()
    }
}
