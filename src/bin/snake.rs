use std::{io, path::PathBuf};

use clap::Parser;
use color_eyre::Result;
use gridsnake::{
    serializer,
    GameState,
    Outcome,
    RandomFood,
};
use itertools::Itertools;
use log::info;

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "snake", version, about = "Steps a snake board tick by tick")]
struct Cli {
    /// Board file to load. The built-in board is used when omitted.
    board: Option<PathBuf>,

    /// Number of ticks to run
    #[arg(long, default_value_t = 20)]
    ticks: u64,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Save the final board here
    #[arg(long)]
    out: Option<PathBuf>,

    /// Only print the final board
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    #[cfg(debug_assertions)]
    info!("{NAME} {VERSION} running in debug mode");

    #[cfg(not(debug_assertions))]
    info!("{NAME} {VERSION} running in release mode");

    let cli = Cli::parse();

    let mut state = match &cli.board {
        Some(path) => serializer::load_file(path)?,
        None => GameState::create_default(),
    };
    let mut food = cli
        .seed
        .map_or_else(RandomFood::from_entropy, RandomFood::seeded);

    let stdout = io::stdout();
    for _ in 0..cli.ticks {
        if state.live_count() == 0 {
            info!("every snake is dead after {} ticks", state.ticks());
            break;
        }

        let tick = state.advance(&mut food);
        let eaten = tick
            .outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, Outcome::Grew { .. }))
            .count();
        info!(
            "tick {}: {} live, {eaten} ate",
            state.ticks(),
            state.live_count()
        );

        if !cli.quiet {
            serializer::render(&state, stdout.lock())?;
            println!();
        }
    }

    if cli.quiet {
        serializer::render(&state, stdout.lock())?;
    }

    info!(
        "final snakes: {}",
        state
            .snakes()
            .iter()
            .map(|snake| format!(
                "#{} {} len {}",
                snake.id,
                if snake.live { "live" } else { "dead" },
                state
                    .snake_length(snake.id)
                    .map_or_else(|| "?".to_owned(), |len| len.to_string())
            ))
            .join(", ")
    );

    if let Some(path) = &cli.out {
        serializer::save_file(&state, path)?;
        info!("saved board to {}", path.display());
    }

    state.release();

    Ok(())
}
