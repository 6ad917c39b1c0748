// Error taxonomy for an assessment run

use std::fmt;
use thiserror::Error;

use crate::config::PersonaKind;

/// Pipeline stage a failure is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CollectInput,
    PersonaReview(PersonaKind),
    Synthesis,
    Persist,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::CollectInput => f.write_str("input collection"),
            Stage::PersonaReview(kind) => write!(f, "{} review", kind),
            Stage::Synthesis => f.write_str("synthesis"),
            Stage::Persist => f.write_str("report write"),
        }
    }
}

/// Why a run stopped. There is no partial result: any of these means no
/// report was written.
#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("could not read the document")]
    Input {
        #[source]
        source: anyhow::Error,
    },

    /// Generation call errored, timed out or returned nothing usable
    #[error("{stage} failed")]
    Service {
        stage: Stage,
        #[source]
        source: anyhow::Error,
    },

    #[error("could not write the report")]
    Output {
        #[source]
        source: anyhow::Error,
    },

    #[error("invalid configuration")]
    Config {
        #[source]
        source: anyhow::Error,
    },
}

impl AssessmentError {
    /// Stage the failure happened in, if it belongs to one
    pub fn stage(&self) -> Option<Stage> {
        match self {
            AssessmentError::Input { .. } => Some(Stage::CollectInput),
            AssessmentError::Service { stage, .. } => Some(*stage),
            AssessmentError::Output { .. } => Some(Stage::Persist),
            AssessmentError::Config { .. } => None,
        }
    }

    pub fn is_service_failure(&self) -> bool {
        matches!(self, AssessmentError::Service { .. })
    }
}
