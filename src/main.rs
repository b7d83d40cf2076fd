#![warn(clippy::all)]

use anyhow::{Context, Result};
use clap::Parser;
use gameoflife::{Board, Config, FpsLimiter, RunOutcome, Simulation, TerminalRenderer};
use tracing_subscriber::EnvFilter;

/// Conway's Game of Life on a bounded board, drawn in the terminal.
#[derive(Parser)]
#[command(name = "gameoflife", version, about)]
struct Args {
    /// Board width in cells.
    #[arg(long, default_value_t = Config::DEFAULT_WIDTH)]
    width: usize,

    /// Board height in cells.
    #[arg(long, default_value_t = Config::DEFAULT_HEIGHT)]
    height: usize,

    /// Percentage of cells seeded alive (0-100).
    #[arg(short, long, default_value_t = Config::DEFAULT_POPULATION_PERCENTAGE)]
    percentage: u32,

    /// Frames per second.
    #[arg(long, default_value_t = Config::DEFAULT_FPS)]
    fps: f64,

    /// Random seed for the initial board.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many generations.
    #[arg(short, long)]
    generations: Option<u64>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            width: args.width,
            height: args.height,
            population_percentage: args.percentage,
            fps: args.fps,
            seed: args.seed,
            max_generations: args.generations,
        }
    }
}

fn init_tracing() {
    // RUST_LOG=gameoflife=trace
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::from(Args::parse());
    config.validate().context("invalid configuration")?;

    let board = Board::seeded(
        config.width,
        config.height,
        config.population_percentage,
        config.seed,
    )
    .context("failed to seed the board")?;
    let mut sim = Simulation::new(board);
    let mut renderer = TerminalRenderer::stdout();
    let mut clock = FpsLimiter::new(config.fps);

    let shutdown = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(%err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    let outcome = gameoflife::run(
        &mut sim,
        &mut renderer,
        &mut clock,
        shutdown,
        config.max_generations,
    )
    .await
    .context("failed to draw the board")?;

    if let Some(message) = farewell(outcome) {
        println!("{message}");
    }
    Ok(())
}

/// Message printed once the run is over.
fn farewell(outcome: RunOutcome) -> Option<&'static str> {
    match outcome {
        RunOutcome::Interrupted { .. } => Some("Program terminated"),
        RunOutcome::Extinct { .. } | RunOutcome::Exhausted { .. } => None,
    }
}
