//! du-params CLI tool
//!
//! Derives the RF parameters of a 5G NR Distributed Unit from its band,
//! bandwidth, subcarrier spacing and center frequency.

mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use duparams_common::{try_init_logging, DuConfig, LogLevel};
use duparams_rf::{
    absolute_frequency_ssb, get_dl_absolute_frequency_point_a, Arfcn, Frequency, Gscn,
    RfParameters, RfSettings,
};

use report::ParamsReport;

#[derive(Parser, Debug)]
#[command(name = "du-params")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "log-level", global = true, default_value = "info")]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Calculate the full RF parameter set of a DU
    Params(ParamsArgs),
    /// Convert a frequency in MHz to an NR-ARFCN
    Arfcn {
        #[arg(value_name = "MHZ")]
        frequency: String,
    },
    /// Convert a frequency in MHz to the nearest GSCN
    Gscn {
        #[arg(value_name = "MHZ")]
        frequency: String,
    },
    /// Calculate absoluteFrequencySSB for a center frequency in MHz
    Ssb {
        #[arg(value_name = "MHZ")]
        frequency: String,
    },
    /// Calculate dl_absoluteFrequencyPointA
    PointA {
        #[arg(value_name = "CENTER_MHZ")]
        center_frequency: String,
        #[arg(value_name = "BANDWIDTH_MHZ")]
        bandwidth: u32,
        /// Align Point A to this subcarrier spacing (kHz)
        #[arg(long = "scs", value_name = "KHZ")]
        subcarrier_spacing: Option<u32>,
    },
}

#[derive(clap::Args, Debug, PartialEq, Eq)]
pub struct ParamsArgs {
    /// DU RF configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE", conflicts_with_all = ["band", "bandwidth", "scs", "center_frequency"])]
    pub config: Option<PathBuf>,

    /// NR band number, e.g. 77
    #[arg(long = "band", value_name = "N")]
    pub band: Option<u16>,

    /// Channel bandwidth in MHz
    #[arg(long = "bandwidth", value_name = "MHZ")]
    pub bandwidth: Option<u32>,

    /// Subcarrier spacing in kHz
    #[arg(long = "scs", value_name = "KHZ")]
    pub scs: Option<u32>,

    /// Center frequency in MHz
    #[arg(long = "center-frequency", value_name = "MHZ")]
    pub center_frequency: Option<String>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `key = value;` lines
    #[default]
    Text,
    Yaml,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = try_init_logging(args.log_level) {
        eprintln!("WARNING: {e}");
    }

    match run(args.command) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Executes a subcommand and returns what should be printed on stdout.
fn run(command: Command) -> Result<String> {
    match command {
        Command::Params(args) => run_params(&args),
        Command::Arfcn { frequency } => {
            let arfcn = Arfcn::from_frequency(parse_mhz(&frequency)?)
                .with_context(|| format!("Cannot convert {frequency} MHz to an ARFCN"))?;
            Ok(format!("{arfcn}\n"))
        }
        Command::Gscn { frequency } => {
            let gscn = Gscn::from_frequency(parse_mhz(&frequency)?)
                .with_context(|| format!("Cannot convert {frequency} MHz to a GSCN"))?;
            Ok(format!("{gscn}\n"))
        }
        Command::Ssb { frequency } => {
            let ssb = absolute_frequency_ssb(parse_mhz(&frequency)?)
                .with_context(|| format!("Cannot place an SSB for {frequency} MHz"))?;
            Ok(format!("{ssb}\n"))
        }
        Command::PointA {
            center_frequency,
            bandwidth,
            subcarrier_spacing,
        } => {
            let center = parse_mhz(&center_frequency)?;
            let scs = subcarrier_spacing.map(|khz| Frequency::khz(i64::from(khz)));
            let point_a = get_dl_absolute_frequency_point_a(center, Frequency::mhz(i64::from(bandwidth)), scs)?;
            Ok(format!("{point_a}\n"))
        }
    }
}

fn run_params(args: &ParamsArgs) -> Result<String> {
    let config = load_config(args)?;
    let settings = RfSettings::from_config(&config).context("Invalid DU RF configuration")?;
    let parameters = RfParameters::compute(&settings)
        .with_context(|| format!("Cannot derive RF parameters for {}", config.gnb_name))?;

    match args.format {
        OutputFormat::Text => Ok(parameters.to_config_text()),
        OutputFormat::Yaml => ParamsReport::new(&config, parameters).to_yaml(),
    }
}

/// Reads the configuration file, or assembles one from the individual flags.
fn load_config(args: &ParamsArgs) -> Result<DuConfig> {
    if let Some(path) = &args.config {
        debug!("Loading DU configuration from {}", path.display());
        return DuConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()));
    }

    let mut missing = Vec::new();
    if args.band.is_none() {
        missing.push("--band");
    }
    if args.bandwidth.is_none() {
        missing.push("--bandwidth");
    }
    if args.scs.is_none() {
        missing.push("--scs");
    }
    if args.center_frequency.is_none() {
        missing.push("--center-frequency");
    }

    match (args.band, args.bandwidth, args.scs, &args.center_frequency) {
        (Some(band), Some(bandwidth), Some(scs), Some(center)) => {
            Ok(DuConfig::new(band, bandwidth, scs, center.clone()))
        }
        _ => bail!(
            "Either --config or all of --band, --bandwidth, --scs and --center-frequency are required (missing {})",
            missing.join(", ")
        ),
    }
}

fn parse_mhz(value: &str) -> Result<Frequency> {
    Frequency::from_mhz(value.trim()).with_context(|| format!("Invalid frequency '{value}'"))
}
