// Review artifacts passed between pipeline stages

use crate::config::PersonaKind;

use super::normalize::normalize;

/// Feedback exactly as the generation service returned it
#[derive(Debug, Clone, PartialEq)]
pub struct RawFeedback {
    pub persona: PersonaKind,
    pub text: String,
}

impl RawFeedback {
    /// Strip markdown decoration, keeping the persona tag
    pub fn normalize(&self) -> NormalizedFeedback {
        NormalizedFeedback {
            persona: self.persona,
            text: normalize(&self.text),
        }
    }
}

/// Feedback with markdown decoration removed, ready for the report body
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedFeedback {
    pub persona: PersonaKind,
    pub text: String,
}

/// Short cross-persona summary
#[derive(Debug, Clone, PartialEq)]
pub struct Synthesis {
    pub text: String,
}
