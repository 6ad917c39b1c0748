// Report assembly and output

pub mod assembler;
pub mod docx;
pub mod sink;
pub mod types;

pub use assembler::{ReportAssembler, READABILITY_LEGEND, REPORT_TITLE};
pub use docx::DocxWriter;
pub use sink::ReportSink;
pub use types::{Report, ReportSection};
