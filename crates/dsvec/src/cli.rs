//! Command line front end
//!
//! Argument definitions and command execution. Execution writes to any
//! [`Write`] so commands can be driven from tests.

use clap::{Args, Parser, Subcommand};
use dsvec_domain::error::Result;
use dsvec_domain::{DistanceMeasure, Vector, VectorWireValue};
use dsvec_infrastructure::logging::{init_logging, log_config_loaded};
use dsvec_infrastructure::{
    AppConfig, ConfigLoader, ErrorContext, NearestQueryOverrides, NearestQueryService,
};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::debug;

/// Command line interface for dsvec
#[derive(Parser, Debug)]
#[command(name = "dsvec")]
#[command(about = "Encode vectors and build nearest-neighbor requests for a document database")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the wire record for a vector
    Encode {
        /// Vector elements, space or comma separated
        #[arg(required = true, allow_negative_numbers = true, value_delimiter = ',')]
        values: Vec<f64>,
    },

    /// Print the vector held by a wire record
    Decode {
        /// File containing the wire record as JSON (stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Print a nearest-neighbor request fragment
    Nearest(NearestArgs),
}

/// Arguments of the `nearest` command
#[derive(Args, Debug)]
pub struct NearestArgs {
    /// Document field holding the stored vectors
    #[arg(long)]
    pub field: String,

    /// Query vector, e.g. "1, 2, 3" or "[1 2 3]"
    #[arg(long, allow_hyphen_values = true)]
    pub vector: Vector,

    /// Maximum number of results (1-1000)
    #[arg(long)]
    pub limit: Option<u32>,

    /// Distance measure: euclidean, cosine or dot-product
    #[arg(long)]
    pub measure: Option<DistanceMeasure>,

    /// Output field for the computed distance
    #[arg(long)]
    pub result_field: Option<String>,

    /// Distance cutoff
    #[arg(long, allow_hyphen_values = true)]
    pub threshold: Option<f64>,
}

impl From<&NearestArgs> for NearestQueryOverrides {
    fn from(args: &NearestArgs) -> Self {
        Self {
            limit: args.limit,
            distance_measure: args.measure,
            distance_result_field: args.result_field.clone(),
            distance_threshold: args.threshold,
        }
    }
}

/// Load configuration, initialize logging and run the selected command
/// against stdin and stdout
pub fn run(cli: &Cli) -> Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;
    if let Some(path) = loader.resolve_config_path() {
        log_config_loaded(&path);
    }

    execute(&cli.command, &config, io::stdin().lock(), &mut io::stdout().lock())
}

/// Run a single command
pub fn execute<R: Read, W: Write>(
    command: &Command,
    config: &AppConfig,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    let rendered = match command {
        Command::Encode { values } => {
            debug!(dimensions = values.len(), "encoding vector");
            Vector::from(values.clone()).to_wire().to_json_pretty()?
        }
        Command::Decode { file } => {
            let text = match file {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => {
                    let mut text = String::new();
                    input
                        .read_to_string(&mut text)
                        .io_context("Failed to read wire record from stdin")?;
                    text
                }
            };
            let wire = VectorWireValue::from_json(&text)?;
            Vector::from_wire(&wire)?.to_string()
        }
        Command::Nearest(args) => {
            let service = NearestQueryService::from_config(config);
            let request = service.build(
                args.field.as_str(),
                args.vector.clone(),
                &NearestQueryOverrides::from(args),
            )?;
            serde_json::to_string_pretty(&request.to_json()?)?
        }
    };

    writeln!(out, "{rendered}").io_context("Failed to write output")?;
    Ok(())
}
