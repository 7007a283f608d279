use anyhow::Context;
use carbon_trip::config::{CliConfig, Command, OutputFormat};
use carbon_trip::core::batch::run_batch;
use carbon_trip::core::emission::estimate_trees_to_offset;
use carbon_trip::core::report::{render_json, render_text};
use carbon_trip::core::{DistanceLookup, TransportCatalog};
use carbon_trip::utils::error::{CalcError, ErrorSeverity};
use carbon_trip::utils::{logger, validation::Validate};
use carbon_trip::{TomlConfig, TripRequest};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli) {
        let Some(calc_error) = e.downcast_ref::<CalcError>() else {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        };

        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            calc_error,
            calc_error.category(),
            calc_error.severity()
        );
        eprintln!("❌ {}", calc_error.user_friendly_message());
        eprintln!("💡 {}", calc_error.recovery_suggestion());

        let exit_code = match calc_error.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn load_config(cli: &CliConfig) -> anyhow::Result<TomlConfig> {
    let Some(path) = &cli.config else {
        return Ok(TomlConfig::default());
    };

    tracing::info!("📁 Loading configuration from: {}", path.display());
    let config = TomlConfig::from_file(path)
        .with_context(|| format!("Failed to load config file '{}'", path.display()))?;
    config.validate()?;
    tracing::info!("✅ Configuration loaded and validated successfully");
    Ok(config)
}

fn run(cli: CliConfig) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let calculator = config.build_calculator()?;

    match cli.command {
        Command::Calc {
            origin,
            destination,
            transport,
            people,
            format,
        } => {
            let request = TripRequest {
                origin,
                destination,
                transport_id: transport,
                people: Some(people),
            };
            let report = calculator.calculate(&request)?;
            match format {
                OutputFormat::Text => print!("{}", render_text(&report)),
                OutputFormat::Json => println!("{}", render_json(&report)?),
            }
        }
        Command::Batch { input, output } => {
            let reader = BufReader::new(File::open(&input).map_err(CalcError::from)?);
            let summary = match output {
                Some(path) => {
                    let writer = BufWriter::new(File::create(&path).map_err(CalcError::from)?);
                    run_batch(&calculator, reader, writer)?
                }
                None => run_batch(&calculator, reader, io::stdout().lock())?,
            };
            eprintln!(
                "✅ {} trips processed ({} ok, {} rejected)",
                summary.processed, summary.succeeded, summary.failed
            );
        }
        Command::Transports => {
            let mut out = io::stdout().lock();
            for transport in calculator.catalog().transports() {
                writeln!(
                    out,
                    "{:<20} {}  {:<30} {} kg CO₂/km",
                    transport.id, transport.icon, transport.display_name, transport.emission_factor
                )?;
            }
        }
        Command::Cities => {
            let mut out = io::stdout().lock();
            for city in calculator.distances().cities() {
                writeln!(out, "{}", city)?;
            }
        }
        Command::Trees { emission_kg } => {
            println!("{}", estimate_trees_to_offset(emission_kg));
        }
    }

    Ok(())
}
