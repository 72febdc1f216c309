//! Command-line interface for scenflow.
//!
//! Reads a scenario description from the arguments or a file, runs the
//! generation pipeline and prints the result.
//!
//! ```sh
//! scenflow "Customers book a table and get a reminder email"
//! scenflow --format diagram --file scenario.txt
//! ```

use std::{fs, process};

use clap::{Parser, ValueEnum};
use scenflow::{Config, Engine, Result, ScenarioResult, ScenflowError};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scenflow")]
#[command(about = "Generate a workflow, flowchart and data model from a scenario description")]
#[command(version)]
struct Cli {
    /// Scenario description
    description: Option<String>,

    /// Read the description from a file
    #[arg(long, short = 'f', conflicts_with = "description")]
    file: Option<String>,

    /// Config file path
    #[arg(long, short = 'c')]
    config: Option<String>,

    /// What to print
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Log filter, e.g. `warn` or `scenflow=debug`
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Diagram,
    Steps,
    Summary,
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over --log-level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init() {
        eprintln!("Failed to install log subscriber: {}", e);
    }

    match run_cli(&cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("Error: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run_cli(cli: &Cli) -> Result<String> {
    let config = match &cli.config {
        Some(path) => Config::create(path)?,
        None => Config::default(),
    };

    let description = match (&cli.description, &cli.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => return Err(ScenflowError::Validation("a description or --file is required".to_string())),
    };

    let engine = Engine::new_with_config(config)?;
    let result = engine.generate(&description)?;

    render(&result, cli.format)
}

fn render(
    result: &ScenarioResult,
    format: OutputFormat,
) -> Result<String> {
    let output = match format {
        OutputFormat::Json => result.to_json()?,
        OutputFormat::Diagram => result.diagram.clone(),
        OutputFormat::Steps => result
            .workflow
            .iter()
            .map(|step| format!("{:>2}. {} [{}] - {}", step.id, step.name, step.step_type, step.description))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Summary => format!("Category: {}\n\n{}", result.category, result.summary),
    };
    Ok(output)
}
