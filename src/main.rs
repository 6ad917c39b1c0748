// Torqa - Terms of Reference quality assessment
// Main entry point

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use crossterm::style::Stylize;
use tracing_subscriber::EnvFilter;

use torqa::config::{load_config, Config, Persona};
use torqa::input::{ConsoleInput, DocumentSource, FileInput};
use torqa::pipeline::{Orchestrator, PipelineSettings};
use torqa::providers::OpenAIProvider;
use torqa::readability;
use torqa::report::DocxWriter;

#[derive(Parser)]
#[command(
    name = "torqa",
    version,
    about = "Assess a Terms of Reference document and write a Word report"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    run: RunArgs,

    /// Log request and stage detail to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List the built-in review personas
    Personas,
}

#[derive(Args)]
struct RunArgs {
    /// Read the document from a file instead of the console
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory the report is written into
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Model for the persona reviews
    #[arg(long)]
    review_model: Option<String>,

    /// Model for the summary
    #[arg(long)]
    summary_model: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Run the three persona reviews concurrently
    #[arg(long)]
    parallel: bool,

    /// API key (overrides the config file)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

impl RunArgs {
    fn apply(self, config: &mut Config) {
        if let Some(key) = self.api_key.filter(|k| !k.is_empty()) {
            config.api_key = key;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(model) = self.review_model {
            config.review_model = model;
        }
        if let Some(model) = self.summary_model {
            config.summary_model = model;
        }
        if let Some(secs) = self.timeout {
            config.request_timeout_secs = secs;
        }
        if self.parallel {
            config.parallel_reviews = true;
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Some(Command::Personas) => list_personas(),
        None => assess(cli.run).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "✗".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "torqa=debug" } else { "torqa=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn list_personas() -> Result<()> {
    for persona in Persona::builtins()? {
        println!(
            "{} {}  {}",
            "▸".cyan().bold(),
            persona.kind.to_string().bold(),
            persona.description.clone().dark_grey()
        );
        println!("    section: {}", persona.report_title);
        println!("    max tokens: {}", persona.max_tokens);
    }
    Ok(())
}

async fn assess(args: RunArgs) -> Result<()> {
    let input = args.input.clone();

    let mut config = load_config()?;
    args.apply(&mut config);
    config.validate()?;

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let provider = OpenAIProvider::new(
        config.api_key.clone(),
        config.base_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?
    .with_model(config.review_model.clone());

    let sink = DocxWriter::new(config.report_path());
    let mut orchestrator = Orchestrator::new(
        Arc::new(provider),
        Box::new(sink),
        PipelineSettings::from(&config),
    )?;

    let mut source: Box<dyn DocumentSource> = match input {
        Some(path) => Box::new(FileInput::new(path)),
        None => {
            eprintln!(
                "{} Paste the Terms of Reference text, then type {} on its own line:",
                "▸".cyan().bold(),
                "END".bold()
            );
            Box::new(ConsoleInput::stdin())
        }
    };

    eprintln!(
        "{} Reviewing with {} (summary: {})",
        "▸".cyan().bold(),
        config.review_model,
        config.summary_model
    );

    let outcome = orchestrator.run(source.as_mut()).await?;

    eprintln!(
        "{} Readability: {:.2} ({})",
        "✓".green(),
        outcome.readability_score,
        readability::band(outcome.readability_score)
    );
    println!(
        "{} Report written to {}",
        "✓".green().bold(),
        outcome.path.display()
    );
    Ok(())
}
