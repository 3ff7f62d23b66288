//! Binary entrypoint for the dungeon crawler.
//!
//! Running with no arguments plays with the defaults: a 5x5 dungeon, one
//! second pacing and `savegame.json` in the working directory.
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crawler::build_info;
use crawler::core::config::GameConfig;
use crawler::core::constants::{DEFAULT_DUNGEON_SIZE, DEFAULT_PACING_MS, DEFAULT_SAVE_FILE};
use crawler::core::game_loop::{run, GameOutcome};
use crawler::ui::console::Console;

#[derive(Parser)]
#[command(name = "crawler")]
#[command(about = "A turn-based grid dungeon crawler")]
#[command(version, long_version = build_info::LONG_VERSION)]
struct Cli {
    /// Save file to write and load
    #[arg(long, default_value = DEFAULT_SAVE_FILE)]
    save: PathBuf,

    /// Side length of each dungeon floor
    #[arg(long, default_value_t = DEFAULT_DUNGEON_SIZE)]
    size: usize,

    /// Delay between combat exchanges and turns, in milliseconds
    #[arg(long, default_value_t = DEFAULT_PACING_MS)]
    delay_ms: u64,

    /// Seed for reproducible dungeons
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose logging to stderr (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = GameConfig {
        save_path: cli.save,
        dungeon_size: cli.size.max(1),
        pacing: Duration::from_millis(cli.delay_ms),
        seed: cli.seed,
    };
    log::debug!("starting with {:?}", config);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), config.pacing);

    match run(&mut console, &config, &mut rng)? {
        GameOutcome::Defeated => log::info!("session ended in defeat"),
        GameOutcome::InvalidChoice => log::info!("no game selected"),
        GameOutcome::InputClosed => log::info!("input closed; leaving without saving"),
    }
    Ok(())
}

fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    let base_level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    builder.filter_level(base_level);
    // RUST_LOG, when set, takes precedence over -v
    builder.parse_default_env();
    builder.target(env_logger::Target::Stderr);
    builder.init();
}
