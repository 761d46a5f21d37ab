mod apple;
mod config;
mod error;
mod game;
mod grid;
mod movement;
mod snake;
mod term;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::GameConfig;
use crate::game::SnakeGame;
use crate::term::TermManager;

pub type GridInt = i32;
pub type Coords = (GridInt, GridInt);

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Steer a snake around a walled grid, q to quit")]
struct Cli {
    /// Milliseconds to wait for a key before the snake moves on its own
    #[arg(long, default_value = "200")]
    tick_ms: u64,

    /// Seed for apple placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs (filtered by RUST_LOG) to this file; the game owns the screen
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let config = GameConfig::default()
        .with_tick(Duration::from_millis(cli.tick_ms))
        .with_seed(cli.seed);
    let mut game = SnakeGame::new(config).context("failed to set up the game")?;

    game.play(&mut TermManager::new())
}

fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
