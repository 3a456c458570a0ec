mod commands;
mod config;
mod output;
mod telemetry;

use aquaprobe_core::model::SourceType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "aquaprobe",
    version,
    about = "Water quality assessment: contamination type, salinity and safety score"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess one or more water samples from a JSON file
    Evaluate {
        /// Path to a JSON file holding a sample object or an array of samples
        input_file: PathBuf,

        /// Custom JSON threshold table (default: $AQUAPROBE_THRESHOLDS, else the standard table)
        #[arg(short, long, value_name = "FILE")]
        thresholds: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show every parameter row, not just flagged ones
        #[arg(long)]
        show_all: bool,

        /// Show the score breakdown and classifier reasoning
        #[arg(long)]
        verbose: bool,
    },
    /// Inspect and validate threshold tables
    Thresholds {
        #[command(subcommand)]
        action: ThresholdsAction,
    },
    /// Print a sample JSON document to fill in
    Template {
        /// Source type: tap, well, river or other
        #[arg(short, long, default_value = "tap")]
        source: SourceType,
    },
}

#[derive(Subcommand)]
enum ThresholdsAction {
    /// List predefined threshold tables
    List,
    /// Explain a threshold table in plain language
    Explain {
        /// Preset name
        #[arg(default_value = "standard")]
        preset: String,

        /// Explain a custom JSON table instead of a preset
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom threshold table
    Validate {
        /// Path to JSON threshold table
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = config::CliConfig::load();

    if let Err(e) = telemetry::init(&config.telemetry) {
        eprintln!("Warning: {e}");
    }

    let result = match cli.command {
        Commands::Evaluate {
            input_file,
            thresholds,
            output,
            show_all,
            verbose,
        } => commands::evaluate::run(
            input_file,
            config.thresholds_path(thresholds),
            &output,
            show_all,
            verbose,
        ),
        Commands::Thresholds { action } => match action {
            ThresholdsAction::List => commands::thresholds::list(),
            ThresholdsAction::Explain { preset, file } => {
                commands::thresholds::explain(&preset, file.as_deref())
            }
            ThresholdsAction::Schema => commands::thresholds::schema(),
            ThresholdsAction::Validate { file } => commands::thresholds::validate(&file),
        },
        Commands::Template { source } => commands::template::run(source),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
