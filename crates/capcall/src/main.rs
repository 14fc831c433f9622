//! Command-line front end for the capital-call scenario engine.
//!
//! Runs one scenario pass and writes the four chart-ready series as JSON on
//! stdout, for a rendering layer (or a human with `jq`) to consume. Logs go
//! to stderr so the JSON stream stays clean.

use std::io::Write;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use capcall_core::{ScenarioConfig, run_scenario};

#[derive(Parser, Debug)]
#[command(name = "capcall")]
#[command(about = "Capital-call scenario engine: schedules, curves, and forecasts as JSON")]
struct Args {
    /// Number of capital calls per year
    #[arg(short, long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=12))]
    calls_per_year: u8,

    /// Seed for both stochastic stages (risk sampler and forecaster)
    #[arg(short, long, default_value_t = 1)]
    seed: u64,

    /// Number of Monte Carlo forecast paths
    #[arg(long, default_value_t = 1000)]
    simulations: usize,

    /// First capital-call date (YYYY-MM-DD)
    #[arg(long, default_value = "2024-06-30")]
    start_date: jiff::civil::Date,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn init_logging(level: &str) {
    // RUST_LOG overrides the --log-level flag
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("capcall={level},capcall_core=warn")));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level);

    let config = ScenarioConfig {
        calls_per_year: args.calls_per_year as usize,
        seed: args.seed,
        num_simulations: args.simulations,
        start_date: args.start_date,
        ..ScenarioConfig::default()
    };

    tracing::info!(
        calls_per_year = config.calls_per_year,
        seed = config.seed,
        simulations = config.num_simulations,
        "running scenario"
    );

    let result = run_scenario(&config)?;

    tracing::info!(
        total_calls = result.call_dates.len(),
        forecast_months = result.forecast.len(),
        "scenario complete"
    );

    let mut stdout = std::io::stdout().lock();
    if args.pretty {
        serde_json::to_writer_pretty(&mut stdout, &result)?;
    } else {
        serde_json::to_writer(&mut stdout, &result)?;
    }
    writeln!(stdout)?;

    Ok(())
}
