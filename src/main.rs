//! Command line interface for the mcslab transport simulator

// standard library
use std::path::PathBuf;

// mcslab modules
use mcslab_transport::{Config, Result, Simulation};

// external crates
use clap::Parser;
use log::{debug, error, info};

/// One-dimensional Monte Carlo neutron transport through a two-region slab
///
/// Transports neutron histories through the slab, accumulates a
/// track-length flux tally over ten spatial bins and estimates the
/// effective multiplication factor from the fission production per cycle.
///
/// The flux tally is written one bin per line to the output file, and the
/// k-eff estimate is printed to the console.
#[derive(Parser)]
#[command(version, arg_required_else_help(false))]
struct Cli {
    /// Read configuration from a JSON file
    ///
    /// Command line options override anything given in the file.
    #[arg(long, value_name = "path")]
    config: Option<PathBuf>,

    /// Number of outer cycles
    #[arg(long, value_name = "n")]
    cycles: Option<usize>,

    /// Initial neutron batch size per cycle
    #[arg(long, value_name = "n")]
    histories: Option<usize>,

    /// Maximum collisions per history
    #[arg(long, value_name = "n")]
    max_collisions: Option<usize>,

    /// Seed for the random number stream
    ///
    /// Runs with the same seed and configuration are byte-identical.
    /// Seeded from entropy when omitted.
    #[arg(long, value_name = "seed")]
    seed: Option<u64>,

    /// Average k-eff over all cycles instead of reporting the final cycle
    #[arg(long)]
    average_keff: bool,

    /// Path for the flux tally output
    #[arg(short, long, value_name = "path", default_value = "flux_output.txt")]
    output: PathBuf,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    stderrlog::new()
        .verbosity(cli.verbose as usize + 1)
        .quiet(cli.quiet)
        .init()
        .unwrap();

    if let Err(e) = run(&cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = collect_config(cli)?;
    debug!("configuration: {config:?}");

    let mut simulation = Simulation::new(config)?;
    let summary = simulation.run();
    info!(
        "transported {} cycles, {} abnormal histories",
        summary.cycles.len(),
        summary.anomalies
    );

    let keff = if simulation.config().average_keff {
        summary.average_keff()
    } else {
        summary.final_keff()
    };
    println!("keff= {keff}");

    simulation.write_flux(&cli.output)?;
    info!("flux tally written to {}", cli.output.display());

    Ok(())
}

/// Merge the file configuration, if any, with command line overrides
fn collect_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(cycles) = cli.cycles {
        config.cycles = cycles;
    }
    if let Some(histories) = cli.histories {
        config.histories_per_cycle = histories;
    }
    if let Some(max_collisions) = cli.max_collisions {
        config.max_collisions = max_collisions;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.average_keff {
        config.average_keff = true;
    }

    Ok(config)
}
