use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "carbon-trip")]
#[command(about = "Estimate the CO₂ emitted by a trip between two capital cities")]
pub struct CliConfig {
    /// Path to an optional TOML file overriding factors, limits and routes
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines on stderr")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Calculate the emission of a single trip
    Calc {
        #[arg(long = "from")]
        origin: Option<String>,

        #[arg(long = "to")]
        destination: Option<String>,

        /// Transport id, see the `transports` command
        #[arg(long)]
        transport: Option<String>,

        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        people: i64,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Calculate every trip of a CSV file (origin,destination,transport,people)
    Batch {
        #[arg(short, long)]
        input: PathBuf,

        /// Defaults to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the available transport types and their emission factors
    Transports,

    /// List the cities with known distances
    Cities,

    /// Number of trees needed to absorb an emission within a year
    Trees {
        #[arg(allow_negative_numbers = true)]
        emission_kg: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
