// Multi-perspective review of a ToR document
//
// Three persona reviews against the same document, markdown normalization of
// their output, and a closing synthesis over all three.

pub mod normalize;
pub mod reviewer;
pub mod synthesis;
pub mod types;

pub use normalize::normalize;
pub use reviewer::PersonaReviewer;
pub use synthesis::SummarySynthesizer;
pub use types::{NormalizedFeedback, RawFeedback, Synthesis};
