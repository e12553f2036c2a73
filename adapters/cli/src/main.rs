#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that plays a headless game with the autopilot.

mod session;

use anyhow::{Context, Result};
use clap::Parser;
use snake_autopilot_core::{Direction, Grid};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Plays snake on a fixed board with the route-planning autopilot.
#[derive(Debug, Parser)]
#[command(name = "snake-autopilot", version, about)]
struct Cli {
    /// Board width in pixels.
    #[arg(long, default_value_t = 700)]
    board_width: u32,
    /// Board height in pixels.
    #[arg(long, default_value_t = 700)]
    board_height: u32,
    /// Edge length of a square cell in pixels.
    #[arg(long, default_value_t = 25)]
    cell_size: u32,
    /// Seed for food placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many ticks even if the game is still running.
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,
    /// Print the summary as JSON.
    #[arg(long)]
    json: bool,
    /// Open with a straight step down before the autopilot starts planning.
    #[arg(long)]
    scripted_opening: bool,
}

/// Builds the log filter from `RUST_LOG`-style directives, defaulting to `info`.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

/// Entry point for the snake autopilot command-line interface.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(
            &std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default(),
        ))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let grid = Grid::from_board(cli.board_width, cli.board_height, cli.cell_size)
        .context("invalid board configuration")?;
    let seed = cli.seed.unwrap_or_else(rand::random);

    tracing::info!(
        columns = grid.columns(),
        rows = grid.rows(),
        seed,
        "starting session"
    );
    let opening = cli.scripted_opening.then_some(Direction::Down);
    let summary = session::run(grid, seed, cli.max_ticks, opening)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&summary).context("failed to encode summary")?;
        println!("{json}");
    } else {
        println!("{summary}");
    }

    Ok(())
}
