//! Tilehopper headless runner.
//!
//! Drives the platformer simulation without a window:
//! - **bevy_ecs** for the entity-component-system simulation
//! - **configparser** for the INI game configuration
//! - **serde_json** for input scripts and snapshot dumps
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults if missing) and the level file
//! 2. Build the ECS world from the level
//! 3. Step the simulation at the configured fixed rate, feeding held keys
//!    from the input script
//! 4. Log the outcome and optionally dump the final render snapshot
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --frames 600 --inputs assets/inputs/demo.json --dump snapshot.json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::{info, warn};

use tilehopper::game::Game;
use tilehopper::replay::InputScript;
use tilehopper::resources::gameconfig::GameConfig;
use tilehopper::resources::tilegrid::Level;

/// Tilehopper headless platformer runner
#[derive(Parser)]
#[command(version, about = "Runs the tilehopper simulation from a scripted input file.")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Level file; overrides `[level] path` from the configuration.
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// JSON input script. Without it the player stands still.
    #[arg(long, value_name = "PATH")]
    inputs: Option<PathBuf>,

    /// Write the final render snapshot as JSON to this path.
    #[arg(long, value_name = "PATH")]
    dump: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}, using defaults", e);
    }
    if let Some(level) = cli.level {
        config.level_path = level;
    }

    let level = Level::from_file(&config.level_path)
        .with_context(|| format!("could not load level {}", config.level_path.display()))?;

    let script = match cli.inputs {
        Some(path) => InputScript::load_from_file(&path)
            .map_err(|e| anyhow!("could not load input script {}: {}", path.display(), e))?,
        None => InputScript::default(),
    };
    if script.total_frames() > cli.frames {
        warn!(
            "Input script covers {} frames, only {} will run",
            script.total_frames(),
            cli.frames
        );
    }

    let dt = config.frame_delta();
    let mut game = Game::new(level, config);

    for frame in 0..cli.frames {
        game.step(dt, script.input_for_frame(frame));
    }

    let snapshot = game.snapshot();
    match &snapshot.player {
        Some(player) => info!(
            "Finished {} frames: player at ({}, {}), score {}, lives {}, {} pickups left",
            cli.frames,
            player.x,
            player.y,
            player.score,
            player.lives,
            snapshot.pickups.len()
        ),
        None => warn!("Finished {} frames without a player", cli.frames),
    }

    if let Some(path) = cli.dump {
        let json = serde_json::to_string_pretty(&snapshot)?;
        std::fs::write(&path, json)
            .with_context(|| format!("could not write snapshot to {}", path.display()))?;
        info!("Snapshot written to {}", path.display());
    }

    Ok(())
}
