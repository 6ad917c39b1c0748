// Reviewer personas
//
// Each persona is a fixed framing of the same review request. The definitions
// live in data/personas/*.toml and are embedded at compile time.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder in `instructions` that receives the verbatim document text.
pub const DOCUMENT_PLACEHOLDER: &str = "{document}";

/// The three built-in reviewer framings, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersonaKind {
    RubricScorer,
    ImplementationTeam,
    PolicyFunder,
}

impl PersonaKind {
    /// All personas in the order their sections appear in the report
    pub const ALL: [PersonaKind; 3] = [
        PersonaKind::RubricScorer,
        PersonaKind::ImplementationTeam,
        PersonaKind::PolicyFunder,
    ];

    /// Stable identifier, matches the data file name
    pub fn slug(&self) -> &'static str {
        match self {
            PersonaKind::RubricScorer => "rubric-scorer",
            PersonaKind::ImplementationTeam => "implementation-team",
            PersonaKind::PolicyFunder => "policy-funder",
        }
    }

    /// Label used when this persona's feedback is quoted to another model
    pub fn label(&self) -> &'static str {
        match self {
            PersonaKind::RubricScorer => "Quality assessment with rubric scores",
            PersonaKind::ImplementationTeam => "Evaluation team perspective",
            PersonaKind::PolicyFunder => "Funder and policy perspective",
        }
    }

    fn template(&self) -> &'static str {
        match self {
            PersonaKind::RubricScorer => include_str!("../../data/personas/rubric-scorer.toml"),
            PersonaKind::ImplementationTeam => {
                include_str!("../../data/personas/implementation-team.toml")
            }
            PersonaKind::PolicyFunder => include_str!("../../data/personas/policy-funder.toml"),
        }
    }
}

impl fmt::Display for PersonaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A persona defines how one reviewer reads the ToR
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    pub kind: PersonaKind,

    /// Display name (e.g., "Rubric Scorer")
    pub name: String,

    /// One-line description of the lens this persona applies
    pub description: String,

    /// Heading of this persona's section in the report
    pub report_title: String,

    /// System-level framing sent with every request
    pub system_prompt: String,

    /// User-level instruction template; contains the rubric or question set
    /// and one `{document}` placeholder
    pub instructions: String,

    /// Output-length cap for this persona's review
    pub max_tokens: u32,
}

impl Persona {
    /// Load a built-in persona
    pub fn load_builtin(kind: PersonaKind) -> Result<Self> {
        let persona: Persona = toml::from_str(kind.template())
            .with_context(|| format!("Failed to parse builtin persona: {}", kind))?;

        if persona.kind != kind {
            bail!(
                "Builtin persona file for {} declares kind {}",
                kind,
                persona.kind
            );
        }
        if !persona.instructions.contains(DOCUMENT_PLACEHOLDER) {
            bail!("Builtin persona {} has no {} placeholder", kind, DOCUMENT_PLACEHOLDER);
        }

        Ok(persona)
    }

    /// Load all built-in personas in report order
    pub fn builtins() -> Result<Vec<Self>> {
        PersonaKind::ALL.into_iter().map(Self::load_builtin).collect()
    }

    /// Render the user instruction with the document embedded verbatim
    pub fn to_user_message(&self, document: &str) -> String {
        self.instructions.replacen(DOCUMENT_PLACEHOLDER, document, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_personas_load() {
        for kind in PersonaKind::ALL {
            let persona = Persona::load_builtin(kind);
            assert!(persona.is_ok(), "Failed to load builtin persona: {}", kind);
        }
    }

    #[test]
    fn test_builtins_in_report_order() {
        let personas = Persona::builtins().unwrap();
        let titles: Vec<&str> = personas.iter().map(|p| p.report_title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Quality Assessment including Scoring",
                "Evaluation Team Perspective",
                "Norwegian Development Aid Bureaucrat Perspective",
            ]
        );
    }

    #[test]
    fn test_rubric_scorer_has_higher_output_cap() {
        let rubric = Persona::load_builtin(PersonaKind::RubricScorer).unwrap();
        let team = Persona::load_builtin(PersonaKind::ImplementationTeam).unwrap();
        let funder = Persona::load_builtin(PersonaKind::PolicyFunder).unwrap();
        assert_eq!(rubric.max_tokens, 1000);
        assert!(rubric.max_tokens > team.max_tokens);
        assert!(rubric.max_tokens > funder.max_tokens);
    }

    #[test]
    fn test_rubric_contains_all_eight_criteria() {
        let rubric = Persona::load_builtin(PersonaKind::RubricScorer).unwrap();
        for heading in [
            "#### 1. Context and Background",
            "#### 2. Purpose, Rationale, and Evaluation Objectives",
            "#### 3. Evaluation Scope",
            "#### 4. Evaluation Questions and Relevance",
            "#### 5. Methodology and Feasibility",
            "#### 6. Roles and Responsibilities",
            "#### 7. Ethics, Risk, and Mitigation Strategies",
            "#### 8. Deliverables",
        ] {
            assert!(rubric.instructions.contains(heading), "missing {}", heading);
        }
        assert_eq!(
            rubric.instructions.matches("**Additional Commentary (non-scored)**").count(),
            2
        );
        assert!(rubric.instructions.contains("(e.g., OECD-DAC criteria)"));
        assert!(rubric
            .instructions
            .contains("  - 1: Deliverables, including datasets, are not clearly defined or missing from the ToR."));
    }

    #[test]
    fn test_user_message_embeds_document_verbatim() {
        let persona = Persona::load_builtin(PersonaKind::ImplementationTeam).unwrap();
        let doc = "Line one.\n  Line {two} with 'quotes'.";
        let message = persona.to_user_message(doc);
        assert!(message.contains(&format!("'{}'", doc)));
        assert!(!message.contains(DOCUMENT_PLACEHOLDER));
    }

    #[test]
    fn test_user_message_with_empty_document() {
        let persona = Persona::load_builtin(PersonaKind::RubricScorer).unwrap();
        let message = persona.to_user_message("");
        assert!(message.contains("### Document Text:\n''\n"));
    }

    #[test]
    fn test_document_containing_placeholder_is_not_expanded_twice() {
        let persona = Persona::load_builtin(PersonaKind::PolicyFunder).unwrap();
        let message = persona.to_user_message("see {document}");
        assert!(message.contains("'see {document}'"));
    }
}
