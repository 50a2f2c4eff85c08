//! CLI entrypoint for MockMentor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod demo;

use anyhow::{Context, Result, bail};
use clap::Parser;
use mentor_application::{
    AssessmentStore, CompleteAssessmentError, CompleteAssessmentUseCase, EventLogger,
    IdentityProvider, ListAssessmentsUseCase, NoEventLogger, NoProgress, SessionProgress,
    StartAssessmentUseCase, SubmitAnswerUseCase, TextGenerator,
};
use mentor_domain::AssessmentMode;
use mentor_infrastructure::{
    ConfigLoader, GeminiTextGateway, InMemoryAssessmentStore, JsonlAssessmentStore,
    JsonlEventLogger, StaticIdentityProvider,
};
use mentor_presentation::{Cli, ConsoleFormatter, OutputFormat, SessionRunner, SpinnerProgress};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to load configuration: {}", e))?
    };
    config.validate().context("invalid configuration")?;

    info!("Starting MockMentor");

    // === Dependency Injection ===
    let events: Arc<dyn EventLogger> = match &cli.events_log {
        Some(path) => match JsonlEventLogger::new(path) {
            Some(logger) => Arc::new(logger),
            None => Arc::new(NoEventLogger),
        },
        None => Arc::new(NoEventLogger),
    };

    let store: Arc<dyn AssessmentStore> = if cli.demo {
        Arc::new(InMemoryAssessmentStore::new())
    } else {
        let path = cli
            .store
            .clone()
            .or_else(|| config.store.path.clone())
            .or_else(default_store_path)
            .context("could not determine where to store assessment records")?;
        Arc::new(JsonlAssessmentStore::new(path)?)
    };

    let identity: Arc<dyn IdentityProvider> = if cli.demo {
        Arc::new(StaticIdentityProvider::new(
            Some("demo-user".to_string()),
            Some(demo::profile()),
        ))
    } else {
        Arc::new(StaticIdentityProvider::from_config(&config.profile))
    };

    // History mode
    if cli.list {
        let use_case = ListAssessmentsUseCase::new(identity, store);
        let records = use_case.execute().await?;
        let output = match cli.output {
            OutputFormat::Json => ConsoleFormatter::format_history_json(&records),
            _ => ConsoleFormatter::format_history(&records),
        };
        println!("{}", output);
        return Ok(());
    }

    // Assessment mode is required from here on
    let Some(mode) = cli.mode else {
        bail!("Choose an assessment: `mockmentor quiz` or `mockmentor interview` (or use --list).");
    };
    let mode: AssessmentMode = mode.into();

    let generator: Arc<dyn TextGenerator> = if cli.demo {
        Arc::new(demo::scripted_generator(mode))
    } else {
        let api_key = config.generator.api_key.clone().context(
            "no API key configured: set generator.api_key in mockmentor.toml \
             or the MOCKMENTOR_GENERATOR__API_KEY environment variable",
        )?;
        Arc::new(GeminiTextGateway::new(
            api_key,
            config.generator.model.clone(),
            config.generator.base_url.clone(),
            Duration::from_secs(config.generator.timeout_secs),
        ))
    };

    let progress: Box<dyn SessionProgress> = if cli.quiet {
        Box::new(NoProgress)
    } else {
        Box::new(SpinnerProgress::new())
    };

    // Create use cases with injected collaborators
    let start = StartAssessmentUseCase::new(identity.clone(), generator.clone())
        .with_event_logger(events.clone());
    let mut started = start.execute(mode, progress.as_ref()).await?;

    if !cli.quiet {
        println!();
        println!(
            "Running a {} assessment for a {} professional: {} questions.",
            mode,
            started.profile.domain(),
            started.session.len()
        );
    }

    let submit = SubmitAnswerUseCase::new(generator.clone());
    SessionRunner::new(&submit, progress.as_ref())
        .run(&mut started.session)
        .await?;

    let complete =
        CompleteAssessmentUseCase::new(generator, store).with_event_logger(events);
    let record = match complete
        .execute(&started.session, &started.caller, &started.profile)
        .await
    {
        Ok(record) => record,
        Err(CompleteAssessmentError::Persistence { summary, source }) => {
            // Storage failed after scoring; the scores still reach the user
            eprintln!("Your overall score: {:.1}%", summary.overall);
            if let Some(technical) = summary.technical {
                eprintln!("Technical: {:.1}%", technical);
            }
            if let Some(communication) = summary.communication {
                eprintln!("Communication: {:.1}%", communication);
            }
            return Err(source).context("the assessment could not be saved");
        }
        Err(error) => return Err(error.into()),
    };

    info!("Assessment recorded for {}", started.caller);

    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&record),
        OutputFormat::Summary => ConsoleFormatter::format_summary(&record),
        OutputFormat::Json => ConsoleFormatter::format_json(&record),
    };
    println!("{}", output);

    Ok(())
}

fn default_store_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("mockmentor").join("assessments.jsonl"))
}
