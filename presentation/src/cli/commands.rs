//! CLI command definitions

use clap::{Parser, ValueEnum};
use mentor_domain::AssessmentMode;
use std::path::PathBuf;

/// Which assessment flow to run
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Ten multiple-choice questions with one correct option each
    Quiz,
    /// Five open-ended questions graded by the AI interviewer
    Interview,
}

impl From<ModeArg> for AssessmentMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Quiz => AssessmentMode::Quiz,
            ModeArg::Interview => AssessmentMode::Interview,
        }
    }
}

/// Output format for assessment results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with every question
    Full,
    /// Only the summary scores and the improvement tip
    Summary,
    /// JSON output
    Json,
}

/// CLI arguments for mockmentor
#[derive(Parser, Debug)]
#[command(name = "mockmentor")]
#[command(author, version, about = "AI-graded mock interviews and technical quizzes")]
#[command(long_about = r#"
MockMentor runs a technical quiz or an AI-graded mock interview in your
terminal, scores the session, and keeps a durable record of every attempt.

Quiz mode asks 10 multiple-choice questions tailored to your profile.
Interview mode asks 5 open-ended questions and grades each answer with
detailed feedback before moving on.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./mockmentor.toml   Project-level config
3. ~/.config/mockmentor/config.toml   Global config

Example:
  mockmentor quiz
  mockmentor interview -vv
  mockmentor --list --output json
  mockmentor quiz --demo
"#)]
pub struct Cli {
    /// Assessment to run (not required with --list)
    #[arg(value_enum)]
    pub mode: Option<ModeArg>,

    /// List past assessments instead of running a new one
    #[arg(short, long)]
    pub list: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Override the assessment record file
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Write structured session events to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub events_log: Option<PathBuf>,

    /// Run offline with scripted content and an in-memory store
    #[arg(long)]
    pub demo: bool,
}
