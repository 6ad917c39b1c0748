// Assessment pipeline

pub mod error;
pub mod orchestrator;

pub use error::{AssessmentError, Stage};
pub use orchestrator::{AssessmentOutcome, Orchestrator, PipelineSettings, PipelineState};
