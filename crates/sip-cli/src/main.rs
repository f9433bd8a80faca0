//! # sip-bulk-fetch
//!
//! Bulk registry metadata fetcher for the sip trusted registry.
//!
//! Reads a file of package names, fetches each one from the registry in
//! order and prints the normalized records as one JSON array on stdout.
//! Progress and failures are reported on stderr.

use clap::Parser;
use sip_core::{Ecosystem, SipError, SipResult};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod batch;
mod config;
mod input;
mod output;

use config::{FetchConfig, DEFAULT_TRUST_SCORE};
use output::{errors::ErrorFormatter, OutputHandler};

/// Fetch registry metadata for a list of packages as trusted-registry records
#[derive(Parser, Debug)]
#[command(name = "sip-bulk-fetch", version, about)]
pub struct Cli {
    /// File with one package name per line ('#' starts a comment)
    #[arg(value_name = "PACKAGES_FILE")]
    pub packages_file: PathBuf,

    /// Ecosystem to query (python, rust)
    #[arg(short, long, env = "SIP_LANG", default_value = "python")]
    pub lang: Ecosystem,

    /// Trust score given to every record (0.0 - 10.0)
    #[arg(short = 's', long, env = "SIP_TRUST_SCORE", default_value_t = DEFAULT_TRUST_SCORE)]
    pub trust_score: f64,

    /// Per-request timeout in seconds
    #[arg(short, long, env = "SIP_TIMEOUT", default_value_t = 10)]
    pub timeout: u64,

    /// Registry base URL (defaults to the ecosystem's public registry)
    #[arg(long, env = "SIP_REGISTRY_URL")]
    pub registry_url: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    setup_panic_handler();

    info!("Starting sip-bulk-fetch v{}", env!("CARGO_PKG_VERSION"));

    match run_cli(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprint!("{}", ErrorFormatter::new().format_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn run_cli(cli: Cli) -> SipResult<()> {
    let config = FetchConfig::from_cli(&cli)?;

    let names = input::read_package_names(&config.packages_file)?;
    if names.is_empty() {
        return Err(SipError::usage("no packages found in file"));
    }
    let client = config.build_client()?;

    // Requests run one at a time.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| SipError::io("Failed to create async runtime".to_string(), e))?;

    let diagnostics = OutputHandler::stderr();
    let report = rt.block_on(batch::run(&client, &names, config.trust_score, &diagnostics))?;
    info!("{} packages processed", report.processed());

    output::emit_records(&report.records, std::io::stdout().lock())
}

fn setup_logging(verbose: bool) {
    let default_filter = if verbose {
        "sip_bulk_fetch=debug,sip_registry=debug,sip_core=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("sip-bulk-fetch encountered an unexpected error: {}", panic_info);
        eprintln!("sip-bulk-fetch crashed! This is a bug.");
        eprintln!("Please report this at: https://github.com/sip-registry/sip/issues");
        eprintln!("Error: {}", panic_info);
    }));
}
