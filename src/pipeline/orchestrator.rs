// Assessment pipeline: input → persona reviews → readability → synthesis → report

use std::path::PathBuf;
use std::sync::Arc;

use super::error::{AssessmentError, Stage};
use crate::config::{Config, Persona};
use crate::input::{DocumentSource, DocumentText};
use crate::providers::LlmProvider;
use crate::readability;
use crate::report::{Report, ReportAssembler, ReportSink};
use crate::review::{
    NormalizedFeedback, PersonaReviewer, RawFeedback, SummarySynthesizer, Synthesis,
};

/// Where a run is, or where it stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    CollectInput,
    ReviewPersonas,
    ScoreReadability,
    Synthesize,
    AssembleAndPersist,
    Done,
    Failed,
}

/// Model and sampling settings for the four generation calls
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub review_model: String,
    pub summary_model: String,
    pub temperature: f32,
    pub summary_max_tokens: u32,
    pub parallel_reviews: bool,
}

impl From<&Config> for PipelineSettings {
    fn from(config: &Config) -> Self {
        Self {
            review_model: config.review_model.clone(),
            summary_model: config.summary_model.clone(),
            temperature: config.temperature,
            summary_max_tokens: config.summary_max_tokens,
            parallel_reviews: config.parallel_reviews,
        }
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Everything a successful run produced
#[derive(Debug, Clone)]
pub struct AssessmentOutcome {
    pub report: Report,
    pub path: PathBuf,
    pub readability_score: f64,
}

/// Runs one assessment end to end.
///
/// The stages run strictly in order and any failure ends the run in
/// [`PipelineState::Failed`] without touching the sink. Only the three persona
/// reviews may overlap, and only when `parallel_reviews` is set; the report
/// keeps its fixed section order either way.
pub struct Orchestrator {
    personas: Vec<Persona>,
    reviewer: PersonaReviewer,
    synthesizer: SummarySynthesizer,
    assembler: ReportAssembler,
    sink: Box<dyn ReportSink>,
    parallel_reviews: bool,
    states: Vec<PipelineState>,
}

impl Orchestrator {
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        sink: Box<dyn ReportSink>,
        settings: PipelineSettings,
    ) -> Result<Self, AssessmentError> {
        let personas =
            Persona::builtins().map_err(|source| AssessmentError::Config { source })?;

        Ok(Self {
            reviewer: PersonaReviewer::new(
                provider.clone(),
                settings.review_model,
                settings.temperature,
            ),
            synthesizer: SummarySynthesizer::new(
                provider,
                settings.summary_model,
                settings.temperature,
                settings.summary_max_tokens,
            ),
            assembler: ReportAssembler::new(personas.clone()),
            personas,
            sink,
            parallel_reviews: settings.parallel_reviews,
            states: Vec::new(),
        })
    }

    /// States visited by the last run, in order
    pub fn states(&self) -> &[PipelineState] {
        &self.states
    }

    /// State the last run ended in
    pub fn state(&self) -> Option<PipelineState> {
        self.states.last().copied()
    }

    pub async fn run(
        &mut self,
        source: &mut dyn DocumentSource,
    ) -> Result<AssessmentOutcome, AssessmentError> {
        self.states.clear();

        match self.run_stages(source).await {
            Ok(outcome) => {
                self.enter(PipelineState::Done);
                Ok(outcome)
            }
            Err(e) => {
                self.enter(PipelineState::Failed);
                tracing::error!(stage = ?e.stage(), error = %e, "assessment failed");
                Err(e)
            }
        }
    }

    async fn run_stages(
        &mut self,
        source: &mut dyn DocumentSource,
    ) -> Result<AssessmentOutcome, AssessmentError> {
        self.enter(PipelineState::CollectInput);
        let document = source
            .read_document()
            .map_err(|source| AssessmentError::Input { source })?;
        if document.is_blank() {
            tracing::warn!(source = %source.describe(), "document is empty; assessing anyway");
        }

        self.enter(PipelineState::ReviewPersonas);
        let raw = self.review_all(&document).await?;
        let feedbacks: Vec<NormalizedFeedback> = raw.iter().map(RawFeedback::normalize).collect();

        self.enter(PipelineState::ScoreReadability);
        let score = readability::flesch_reading_ease(document.as_str());
        tracing::info!(score, band = readability::band(score), "readability scored");

        self.enter(PipelineState::Synthesize);
        let synthesis: Synthesis = self
            .synthesizer
            .synthesize(&feedbacks, score)
            .await
            .map_err(|source| AssessmentError::Service {
                stage: Stage::Synthesis,
                source,
            })?;

        self.enter(PipelineState::AssembleAndPersist);
        let report = self
            .assembler
            .assemble(&feedbacks, score, &synthesis)
            .map_err(|source| AssessmentError::Output { source })?;
        let path = self
            .sink
            .persist(&report)
            .map_err(|source| AssessmentError::Output { source })?;

        Ok(AssessmentOutcome {
            report,
            path,
            readability_score: score,
        })
    }

    async fn review_all(
        &self,
        document: &DocumentText,
    ) -> Result<Vec<RawFeedback>, AssessmentError> {
        if self.parallel_reviews {
            // try_join_all yields results in input order
            return futures::future::try_join_all(
                self.personas
                    .iter()
                    .map(|persona| self.review_one(persona, document)),
            )
            .await;
        }

        let mut feedbacks = Vec::with_capacity(self.personas.len());
        for persona in &self.personas {
            feedbacks.push(self.review_one(persona, document).await?);
        }
        Ok(feedbacks)
    }

    async fn review_one(
        &self,
        persona: &Persona,
        document: &DocumentText,
    ) -> Result<RawFeedback, AssessmentError> {
        self.reviewer
            .review(persona, document)
            .await
            .map_err(|source| AssessmentError::Service {
                stage: Stage::PersonaReview(persona.kind),
                source,
            })
    }

    fn enter(&mut self, state: PipelineState) {
        tracing::debug!(?state, "pipeline state");
        self.states.push(state);
    }
}
