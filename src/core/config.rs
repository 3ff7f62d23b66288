//! Runtime configuration for one play session.

use std::path::PathBuf;
use std::time::Duration;

use crate::core::constants::{DEFAULT_DUNGEON_SIZE, DEFAULT_PACING_MS, DEFAULT_SAVE_FILE};

#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Where the single save file lives
    pub save_path: PathBuf,

    /// Side length of generated floors
    pub dungeon_size: usize,

    /// Cosmetic delay between combat exchanges and turns
    pub pacing: Duration,

    /// Random seed for reproducible floors (None = entropy)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_FILE),
            dungeon_size: DEFAULT_DUNGEON_SIZE,
            pacing: Duration::from_millis(DEFAULT_PACING_MS),
            seed: None,
        }
    }
}

impl GameConfig {
    /// No delays, fixed seed; for scripted runs.
    pub fn headless(save_path: impl Into<PathBuf>, seed: u64) -> Self {
        Self {
            save_path: save_path.into(),
            pacing: Duration::ZERO,
            seed: Some(seed),
            ..Default::default()
        }
    }
}
