//! JSON save file: the player's full state plus the current grid.
//!
//! Position, dungeon level and any pending enemy are deliberately absent;
//! a loaded game always restarts at (0, 0) on dungeon level 1.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::character::player::Player;
use crate::core::game_state::Session;
use crate::dungeon::types::Dungeon;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed save data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("saved dungeon must be a non-empty square grid")]
    InvalidDungeon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub class: String,
    pub health: u32,
    pub attack: u32,
    pub defense: u32,
    pub inventory: Vec<String>,
    pub experience: u32,
    pub level: u32,
}

impl From<&Player> for PlayerRecord {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            class: player.player_class.as_str().to_string(),
            health: player.health,
            attack: player.attack,
            defense: player.defense,
            inventory: player.inventory.clone(),
            experience: player.experience,
            level: player.level,
        }
    }
}

impl PlayerRecord {
    /// Rebuilds the player through the normal constructor, then overwrites
    /// every stat with the saved absolute values.
    pub fn into_player(self) -> Player {
        let mut player = Player::new(self.name, &self.class);
        player.health = self.health;
        player.attack = self.attack;
        player.defense = self.defense;
        player.inventory = self.inventory;
        player.experience = self.experience;
        player.level = self.level;
        player
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    pub player: PlayerRecord,
    pub dungeon: Dungeon,
}

impl SaveData {
    pub fn from_session(session: &Session) -> Self {
        Self {
            player: PlayerRecord::from(&session.player),
            dungeon: session.dungeon.clone(),
        }
    }

    /// Turns a loaded save into a fresh session. `dungeon_size` only
    /// applies to floors generated after the next exit.
    pub fn into_session(self, dungeon_size: usize) -> Session {
        Session::resume(self.player.into_player(), self.dungeon, dungeon_size)
    }
}

/// Reads and writes the single save file.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    pub fn new(save_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
        }
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Writes the session, replacing any previous save.
    pub fn save(&self, session: &Session) -> Result<(), SaveError> {
        let json = serde_json::to_string_pretty(&SaveData::from_session(session))?;
        write_atomic(&self.save_path, &json)?;
        log::info!("saved game to {}", self.save_path.display());
        Ok(())
    }

    /// Loads and validates the save file.
    pub fn load(&self) -> Result<SaveData, SaveError> {
        let json = fs::read_to_string(&self.save_path)?;
        let mut data: SaveData = serde_json::from_str(&json)?;
        data.dungeon =
            Dungeon::from_rows(data.dungeon.into_rows()).ok_or(SaveError::InvalidDungeon)?;
        log::info!("loaded game from {}", self.save_path.display());
        Ok(data)
    }
}

/// Writes to a sibling temp file and renames it over `path`, so a failed
/// write never leaves a half-written save behind.
fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let base = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("savegame.json");
    let mut counter = 0u32;
    let tmp_path = loop {
        let candidate = dir.join(format!(".{}.tmp-{}-{}", base, std::process::id(), counter));
        match OpenOptions::new().write(true).create_new(true).open(&candidate) {
            Ok(mut tmp) => {
                tmp.write_all(content.as_bytes())?;
                tmp.sync_all()?;
                break candidate;
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                counter = counter.saturating_add(1);
            }
            Err(e) => return Err(e),
        }
    };

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    Ok(())
}
