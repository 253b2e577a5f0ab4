use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use trail_energy::{
    config::EstimatorConfig,
    path::TerminalDelta,
    report::{self, Units},
    sources::load_instructions,
};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum TerminalArg {
    Stale,
    Zero,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate energy and time for every instruction of a route file (.gpx or .json)
    Estimate {
        file: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// JSON estimator configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Elevation change used for the last instruction
        #[arg(long, value_enum)]
        terminal_delta: Option<TerminalArg>,

        /// Estimate segments in parallel
        #[arg(long)]
        parallel: bool,

        /// Report distances in miles and feet
        #[arg(long)]
        miles: bool,
    },
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Estimate {
            file,
            format,
            config,
            terminal_delta,
            parallel,
            miles,
        } => {
            let mut config = EstimatorConfig::load(config.as_deref())?;
            if let Some(terminal) = terminal_delta {
                config.terminal_delta = match terminal {
                    TerminalArg::Stale => TerminalDelta::ReuseStale,
                    TerminalArg::Zero => TerminalDelta::Zero,
                };
            }
            config.parallel |= parallel;

            tracing::info!("Reading instructions from {}", file.display());
            let instructions = load_instructions(&file)?;

            let estimator = config.estimator()?;
            let estimate = if config.parallel {
                estimator.estimate_parallel(&instructions)?
            } else {
                estimator.estimate(&instructions)?
            };

            let output = match format {
                Format::Text => {
                    let units = if miles { Units::Imperial } else { Units::Metric };
                    report::render_text(&instructions, &estimate, units)
                }
                Format::Json => report::render_json(&instructions, &estimate)?,
            };
            print!("{output}");
        }
    }

    Ok(())
}
