// Report assembly: fixed section order, readability legend, synthesis

use anyhow::{Context, Result};
use chrono::Utc;

use super::types::{Report, ReportSection};
use crate::config::{Persona, PersonaKind};
use crate::review::{NormalizedFeedback, Synthesis};

pub const REPORT_TITLE: &str = "Terms of Reference Quality Assurance Report";
pub const READABILITY_HEADING: &str = "Readability Score";
pub const SUMMARY_HEADING: &str = "Summary";

/// Line spacing applied to every section body
pub const BODY_LINE_SPACING: f32 = 1.5;

/// Fixed interpretation printed under the numeric readability score
pub const READABILITY_LEGEND: &str = "\
Interpretation of the Flesch Reading Ease score:
90-100: Very easy to read. Easily understood by young readers.
60-70: Standard readability. Easily understood by teenagers (13 to 15 years old).
30-50: Difficult to read. Best understood by college-level readers.
Below 30: Very complex. Best understood by university graduates and advanced readers.";

/// Composes the five report sections in their fixed order:
/// the three persona sections (rubric scorer, implementation team,
/// policy/funder), then readability, then summary.
pub struct ReportAssembler {
    personas: Vec<Persona>,
}

impl ReportAssembler {
    /// `personas` supplies the section heading for each persona kind
    pub fn new(personas: Vec<Persona>) -> Self {
        Self { personas }
    }

    pub fn assemble(
        &self,
        feedbacks: &[NormalizedFeedback],
        readability_score: f64,
        synthesis: &Synthesis,
    ) -> Result<Report> {
        let mut sections = Vec::with_capacity(PersonaKind::ALL.len() + 2);

        for kind in PersonaKind::ALL {
            let persona = self
                .personas
                .iter()
                .find(|p| p.kind == kind)
                .with_context(|| format!("No persona definition for {}", kind))?;
            let feedback = feedbacks
                .iter()
                .find(|f| f.persona == kind)
                .with_context(|| format!("No feedback from {}", kind))?;

            sections.push(section(&persona.report_title, feedback.text.clone()));
        }

        sections.push(section(
            READABILITY_HEADING,
            readability_body(readability_score),
        ));
        sections.push(section(SUMMARY_HEADING, synthesis.text.clone()));

        Ok(Report {
            title: REPORT_TITLE.to_string(),
            sections,
            generated_at: Utc::now(),
        })
    }
}

/// Score with two decimals, a blank line, then the fixed legend
pub fn readability_body(score: f64) -> String {
    format!(
        "Flesch Reading Ease score: {:.2}\n\n{}",
        score, READABILITY_LEGEND
    )
}

fn section(heading: &str, body: String) -> ReportSection {
    ReportSection {
        heading: heading.to_string(),
        body,
        line_spacing: BODY_LINE_SPACING,
    }
}
