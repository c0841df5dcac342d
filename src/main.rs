use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use essaymark::config::{Config, OutputFormat};
use essaymark::error::EssayError;
use essaymark::input::{Submission, EMPTY_INPUT_WARNING};
use essaymark::output::{json, terminal};
use essaymark::pipeline::batch;
use essaymark::scoring::engine::{EssayScorer, ScorerConfig};

/// essaymark: heuristic essay scoring.
///
/// Scores an essay for content relevance, grammar, structure and vocabulary
/// on a 1-10 scale, and averages them into a total.
#[derive(Parser)]
#[command(name = "essaymark", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one essay
    Score {
        /// File to read the essay from ("-" or omitted reads stdin)
        path: Option<PathBuf>,

        /// Score this text instead of reading a file
        #[arg(long, conflicts_with = "path")]
        text: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score several essay files and rank them
    Batch {
        /// Essay files
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the normalized form of a text, as seen by the relevance score
    Normalize {
        /// File to read ("-" or omitted reads stdin)
        path: Option<PathBuf>,

        /// Normalize this text instead of reading a file
        #[arg(long, conflicts_with = "path")]
        text: Option<String>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays clean for reports and JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("essaymark=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    if !config.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Score {
            path,
            text,
            json: as_json,
        } => {
            let scorer = EssayScorer::new(ScorerConfig::default())?;
            let bytes = read_input(path, text)?;

            let submission = match Submission::from_bytes(bytes, &config.placeholder) {
                Ok(submission) => submission,
                Err(e) if is_rejected(&e) => {
                    terminal::display_rejection(EMPTY_INPUT_WARNING);
                    std::process::exit(1);
                }
                Err(e) => return Err(e),
            };

            let report = scorer.evaluate(submission.text())?;

            match output_format(as_json, &config) {
                OutputFormat::Json => println!("{}", json::report_to_json(&report)?),
                OutputFormat::Text => terminal::display_report(&report),
            }
        }

        Commands::Batch {
            paths,
            json: as_json,
        } => {
            let scorer = EssayScorer::new(ScorerConfig::default())?;
            let format = output_format(as_json, &config);

            info!(files = paths.len(), "Scoring essay batch");
            let mut entries = batch::run(
                &scorer,
                &paths,
                &config.placeholder,
                format == OutputFormat::Text,
            );
            batch::rank(&mut entries);

            match format {
                OutputFormat::Json => println!("{}", json::batch_to_json(&entries)?),
                OutputFormat::Text => terminal::display_batch(&entries),
            }
        }

        Commands::Normalize { path, text } => {
            let scorer = EssayScorer::new(ScorerConfig::default())?;
            let bytes = read_input(path, text)?;
            let raw = String::from_utf8(bytes).map_err(|e| EssayError::Encoding(e.to_string()))?;
            println!("{}", scorer.normalizer().normalize(&raw)?);
        }
    }

    Ok(())
}

/// Collect raw input bytes from `--text`, a file, or stdin.
fn read_input(path: Option<PathBuf>, text: Option<String>) -> Result<Vec<u8>> {
    if let Some(text) = text {
        return Ok(text.into_bytes());
    }

    match path {
        Some(p) if p.as_os_str() != "-" => {
            std::fs::read(&p).with_context(|| format!("Failed to read {}", p.display()))
        }
        _ => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read essay from stdin")?;
            Ok(buf)
        }
    }
}

fn output_format(json_flag: bool, config: &Config) -> OutputFormat {
    if json_flag {
        OutputFormat::Json
    } else {
        config.output_format
    }
}

fn is_rejected(err: &anyhow::Error) -> bool {
    err.downcast_ref::<EssayError>()
        .is_some_and(EssayError::is_rejected_submission)
}
