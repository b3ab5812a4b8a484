//! sdkgen binding generator
//!
//! Generates documented client bindings and a dispatcher from a service
//! description.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use sdkgen_define::ServiceDefinition;
use sdkgen_gen::errors::GeneratorError;
use sdkgen_gen::output::{GeneratorConfig, generate_service, write_service};
use tracing_subscriber::EnvFilter;

/// sdkgen - transforms service descriptions into documented client bindings
#[derive(Parser, Debug)]
#[command(name = "sdkgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Service description JSON (e.g., "dynamodb/2012-08-10/service-2.json")
    #[arg(short, long)]
    service: PathBuf,

    /// Worked examples JSON for the same service
    #[arg(short, long)]
    examples: Option<PathBuf>,

    /// Output directory for generated files
    #[arg(short, long, default_value = "out")]
    output: PathBuf,

    /// Module name to use instead of the one derived from the description
    #[arg(short, long)]
    module: Option<String>,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut service = load_service(&cli.service)?;
    if let Some(path) = &cli.examples {
        let json = std::fs::read_to_string(path).map_err(|e| read_error(path, e))?;
        service = service.with_examples_json(&json)?;
    }

    if cli.verbose > 0 {
        eprintln!(
            "{} {} ({} protocol, {} operations)",
            "Loaded".cyan(),
            service.metadata.endpoint_prefix.bold(),
            service.metadata.protocol,
            service.operations.len()
        );
        if cli.dry_run {
            eprintln!("{}", "Dry run mode - no files will be written".yellow());
        }
    }

    let config = GeneratorConfig {
        module_name: cli.module.clone(),
        ..GeneratorConfig::default()
    };
    let generated = generate_service(&service, &config)?;
    let paths = write_service(&generated, &cli.output, cli.dry_run)?;

    if !cli.dry_run {
        for path in paths {
            eprintln!("{} {}", "Generated".green().bold(), path.display());
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise `-v` flags pick the level. Logs go to stderr so
/// dry-run output on stdout stays clean.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_service(path: &Path) -> Result<ServiceDefinition, GeneratorError> {
    let file = File::open(path).map_err(|e| read_error(path, e))?;
    Ok(ServiceDefinition::from_json_reader(BufReader::new(file))?)
}

fn read_error(path: &Path, source: std::io::Error) -> GeneratorError {
    GeneratorError::ReadError {
        path: path.display().to_string(),
        source,
    }
}
