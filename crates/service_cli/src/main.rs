//! portfolio-analyzer - command line front end for the PnL engine
//!
//! # Commands
//!
//! - `portfolio-analyzer price --portfolio <file>` - Cost table and aggregate initial cost
//! - `portfolio-analyzer payoff --portfolio <file>` - Payoff diagram at expiry
//! - `portfolio-analyzer simulate --portfolio <file>` - Monte Carlo PnL distribution
//!
//! Defaults come from `analyzer.toml` (if present), then `ANALYZER_*`
//! environment variables, then command-line flags.

use clap::{Parser, Subcommand};
use pricer_core::market_data::MarketContext;
use pricer_pricing::mc::{CostBasis, SimulationConfig};
use pricer_risk::pnl::SimulationScenario;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use service_cli::commands::{self, payoff::PayoffGrid};
use service_cli::{load_portfolio, AnalyzerConfig, OutputFormat, Result};

/// Option portfolio pricing and PnL analysis
#[derive(Parser)]
#[command(name = "portfolio-analyzer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "analyzer.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Market overrides shared by `price` and `simulate`.
#[derive(clap::Args)]
struct MarketArgs {
    /// Current underlying price
    #[arg(long)]
    spot: Option<f64>,

    /// Horizon in years
    #[arg(long)]
    horizon: Option<f64>,

    /// Risk-free rate
    #[arg(long, allow_negative_numbers = true)]
    rate: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Price every instrument and the whole portfolio
    Price {
        /// Path to portfolio file (TOML/CSV)
        #[arg(short, long)]
        portfolio: PathBuf,

        #[command(flatten)]
        market: MarketArgs,

        /// Cost basis for options (snapshot, market)
        #[arg(long)]
        cost_basis: Option<CostBasis>,

        /// Output format (json, csv, table)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Tabulate the payoff at expiry over a spot range
    Payoff {
        /// Path to portfolio file (TOML/CSV)
        #[arg(short, long)]
        portfolio: PathBuf,

        /// Lowest spot
        #[arg(long)]
        lower: Option<f64>,

        /// Highest spot
        #[arg(long)]
        upper: Option<f64>,

        /// Number of grid points
        #[arg(long)]
        points: Option<usize>,

        /// Output format (json, csv, table)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Simulate the PnL distribution at the horizon
    Simulate {
        /// Path to portfolio file (TOML/CSV)
        #[arg(short, long)]
        portfolio: PathBuf,

        #[command(flatten)]
        market: MarketArgs,

        /// Expected annual drift
        #[arg(long, allow_negative_numbers = true)]
        drift: Option<f64>,

        /// Annual volatility
        #[arg(long)]
        volatility: Option<f64>,

        /// Number of Monte Carlo scenarios
        #[arg(short, long)]
        num_simulations: Option<usize>,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Cost basis for options (snapshot, market)
        #[arg(long)]
        cost_basis: Option<CostBasis>,

        /// Histogram bin count
        #[arg(long)]
        bins: Option<usize>,

        /// Evaluate payoffs in parallel
        #[arg(long)]
        parallel: bool,

        /// Output format (json, csv, table)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },
}

fn init_tracing(verbose: bool, log_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(path: &Path) -> Result<AnalyzerConfig> {
    let config = AnalyzerConfig::load_or_default(path)?.with_env_override()?;
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    init_tracing(cli.verbose, &config.log_level);
    debug!(config = %cli.config.display(), "Configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Price {
            portfolio,
            market,
            cost_basis,
            format,
        } => {
            let portfolio = load_portfolio(&portfolio)?;
            let context = MarketContext::new(
                market.spot.unwrap_or(config.market.spot),
                market.rate.unwrap_or(config.market.rate),
                market.horizon.unwrap_or(config.market.horizon),
            )?;
            let basis = cost_basis.unwrap_or(config.simulation.cost_basis);
            commands::price::run(&portfolio, &context, basis, format, &mut out)
        }
        Commands::Payoff {
            portfolio,
            lower,
            upper,
            points,
            format,
        } => {
            let portfolio = load_portfolio(&portfolio)?;
            let grid = PayoffGrid {
                lower: lower.unwrap_or(config.diagram.lower),
                upper: upper.unwrap_or(config.diagram.upper),
                points: points.unwrap_or(config.diagram.points),
            };
            commands::payoff::run(&portfolio, grid, format, &mut out)
        }
        Commands::Simulate {
            portfolio,
            market,
            drift,
            volatility,
            num_simulations,
            seed,
            cost_basis,
            bins,
            parallel,
            format,
        } => {
            let portfolio = load_portfolio(&portfolio)?;
            let scenario = SimulationScenario::new(
                market.spot.unwrap_or(config.market.spot),
                drift.unwrap_or(config.market.drift),
                volatility.unwrap_or(config.market.volatility),
                market.horizon.unwrap_or(config.market.horizon),
                market.rate.unwrap_or(config.market.rate),
            )?;
            let sim_config = SimulationConfig::builder()
                .n_simulations(num_simulations.unwrap_or(config.simulation.num_simulations))
                .maybe_seed(seed.or(config.simulation.seed))
                .cost_basis(cost_basis.unwrap_or(config.simulation.cost_basis))
                .parallel(parallel || config.simulation.parallel)
                .build()?;
            let bins = bins.unwrap_or(config.simulation.bins);
            commands::simulate::run(&portfolio, &scenario, sim_config, bins, format, &mut out)
                .map(|_| ())
        }
    }
}
