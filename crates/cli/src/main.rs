mod args;
mod commands;
pub mod defaults;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};

use args::RunArgs;
use commands::{analytic, run};

/// Cylevo: A Genetic Cylinder Optimizer
///
/// This tool searches for the radius that minimizes the surface area of a
/// cylinder of fixed volume, using a generational genetic algorithm with
/// roulette selection, arithmetic crossover and Gaussian mutation.
#[derive(Parser, Debug)]
#[command(name = "cylevo")]
#[command(author, version, about = "Minimizes the surface area of a fixed-volume cylinder with a genetic algorithm", long_about = None)]
struct Cli {
    /// Enable debug logging (written to stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the genetic algorithm.
    ///
    /// Evolves a population of radii and compares the best one with the
    /// closed-form optimum.
    Run(Box<RunArgs>),

    /// Print the closed-form optimum for a volume.
    Analytic {
        /// Fixed cylinder volume
        #[arg(long, default_value_t = defaults::VOLUME)]
        volume: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run(args) => {
            run::run_optimizer(&args)?;
        }
        Commands::Analytic { volume } => {
            analytic::show_analytic(volume)?;
        }
    }

    Ok(())
}
