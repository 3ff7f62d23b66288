//! Dungeon grid data structures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label attached to a dungeon cell. Serialized as its lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Empty,
    Enemy,
    Item,
    Trap,
    Secret,
    Exit,
}

impl RoomType {
    pub const ALL: [RoomType; 6] = [
        RoomType::Empty,
        RoomType::Enemy,
        RoomType::Item,
        RoomType::Trap,
        RoomType::Secret,
        RoomType::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RoomType::Empty => "empty",
            RoomType::Enemy => "enemy",
            RoomType::Item => "item",
            RoomType::Trap => "trap",
            RoomType::Secret => "secret",
            RoomType::Exit => "exit",
        }
    }

    /// Rooms emptied as soon as they are entered. Enemy rooms are only
    /// emptied by winning the fight.
    pub fn is_one_shot(&self) -> bool {
        matches!(self, RoomType::Item | RoomType::Trap | RoomType::Secret)
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compass direction for a single move. North/south walk rows (x),
/// west/east walk columns (y).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// Parses the single-key commands `w`, `s`, `a`, `d`.
    pub fn from_key(input: &str) -> Option<Self> {
        match input {
            "w" => Some(Direction::North),
            "s" => Some(Direction::South),
            "a" => Some(Direction::West),
            "d" => Some(Direction::East),
            _ => None,
        }
    }

    /// Returns the neighbouring position, or None when it would leave a
    /// grid of side `size`.
    pub fn step(&self, (x, y): (usize, usize), size: usize) -> Option<(usize, usize)> {
        match self {
            Direction::North => x.checked_sub(1).map(|nx| (nx, y)),
            Direction::South => (x + 1 < size).then_some((x + 1, y)),
            Direction::West => y.checked_sub(1).map(|ny| (x, ny)),
            Direction::East => (y + 1 < size).then_some((x, y + 1)),
        }
    }
}

/// Square grid of rooms, addressed as `rows[x][y]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dungeon {
    rows: Vec<Vec<RoomType>>,
}

impl Dungeon {
    /// Wraps rows, rejecting grids that are empty or not square.
    pub fn from_rows(rows: Vec<Vec<RoomType>>) -> Option<Self> {
        let size = rows.len();
        if size == 0 || rows.iter().any(|row| row.len() != size) {
            return None;
        }
        Some(Self { rows })
    }

    /// Builds a `size` x `size` grid (at least 1x1), filling cells row by row.
    pub fn from_fn(size: usize, mut room_at: impl FnMut(usize, usize) -> RoomType) -> Self {
        let size = size.max(1);
        let rows = (0..size)
            .map(|x| (0..size).map(|y| room_at(x, y)).collect())
            .collect();
        Self { rows }
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<RoomType>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<RoomType>> {
        self.rows
    }

    pub fn get_room(&self, x: usize, y: usize) -> Option<RoomType> {
        self.rows.get(x).and_then(|row| row.get(y)).copied()
    }

    pub fn set_room(&mut self, x: usize, y: usize, room: RoomType) {
        if let Some(cell) = self.rows.get_mut(x).and_then(|row| row.get_mut(y)) {
            *cell = room;
        }
    }

    /// Marks a resolved room as empty so its effect cannot repeat.
    pub fn clear_room(&mut self, x: usize, y: usize) {
        self.set_room(x, y, RoomType::Empty);
    }

    pub fn count_rooms(&self, room_type: RoomType) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|room| **room == room_type)
            .count()
    }
}
