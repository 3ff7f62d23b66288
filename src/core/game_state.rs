use crate::character::player::Player;
use crate::combat::types::Enemy;
use crate::core::constants::STARTING_DUNGEON_LEVEL;
use crate::dungeon::generation::generate_dungeon;
use crate::dungeon::types::{Dungeon, RoomType};
use rand::Rng;

/// Which input the session is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Start of a turn: the current room has not been resolved yet.
    RoomEntry,
    /// An enemy is present; waiting for fight or flee.
    EncounterChoice,
    /// Waiting for a direction.
    Movement,
    /// Waiting for the save yes/no answer.
    SavePrompt,
    /// Player health reached zero. Terminal.
    GameOver,
}

/// Everything one continuous play session owns.
///
/// `dungeon_level` drives enemy scaling and regeneration and is kept apart
/// from `player.level`, which only tracks character progression.
#[derive(Debug, Clone)]
pub struct Session {
    pub player: Player,
    pub dungeon: Dungeon,
    /// (x, y) = (row, column)
    pub position: (usize, usize),
    pub dungeon_level: u32,
    /// Side length used when a new floor is generated.
    pub dungeon_size: usize,
    pub phase: Phase,
    /// Enemy waiting on a fight-or-flee answer. Never saved.
    pub encounter: Option<Enemy>,
}

impl Session {
    /// Starts a new game on a freshly generated level-1 floor.
    pub fn new(player: Player, dungeon_size: usize, rng: &mut impl Rng) -> Self {
        let dungeon = generate_dungeon(dungeon_size, STARTING_DUNGEON_LEVEL, rng);
        Self::resume(player, dungeon, dungeon_size)
    }

    /// Continues with an existing grid. Position and dungeon level always
    /// restart at (0, 0) and level 1. A dead player is caught on the first
    /// room entry, which ends the game.
    pub fn resume(player: Player, dungeon: Dungeon, dungeon_size: usize) -> Self {
        Self {
            player,
            dungeon,
            position: (0, 0),
            dungeon_level: STARTING_DUNGEON_LEVEL,
            dungeon_size,
            phase: Phase::RoomEntry,
            encounter: None,
        }
    }

    pub fn current_room(&self) -> RoomType {
        let (x, y) = self.position;
        self.dungeon.get_room(x, y).unwrap_or(RoomType::Empty)
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}
