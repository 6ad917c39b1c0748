// Project-wide constants
//
// Centralised here so model names and other magic values have one
// source of truth. Import via `use crate::config::constants::*;`.

/// Chat completions endpoint host used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Higher-capability model tier, used for the three persona reviews.
pub const DEFAULT_REVIEW_MODEL: &str = "gpt-4o";

/// Lower-cost model tier, used for the closing synthesis.
pub const DEFAULT_SUMMARY_MODEL: &str = "gpt-4o-mini";

/// Sampling temperature shared by every generation call.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Output cap for the synthesis call.
pub const SUMMARY_MAX_TOKENS: u32 = 300;

/// Per-request timeout for the generation service.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// File name of the generated report, written into the output directory.
pub const REPORT_FILE_NAME: &str = "ToR_Quality_Assessment_Report.docx";

/// Sentinel line that terminates console input (case-insensitive).
pub const INPUT_SENTINEL: &str = "END";
