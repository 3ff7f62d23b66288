//! Dungeon grid generation.

use crate::dungeon::types::{Dungeon, RoomType};
use rand::seq::SliceRandom;
use rand::Rng;

/// Generates a `size` x `size` grid where every cell is an independent,
/// uniform pick from the six room types.
///
/// `level` is accepted so callers can pass the dungeon depth, but the room
/// distribution is currently the same at every level.
pub fn generate_dungeon(size: usize, level: u32, rng: &mut impl Rng) -> Dungeon {
    let dungeon = Dungeon::from_fn(size, |_, _| random_room(&mut *rng));
    log::debug!(
        "generated {}x{} dungeon for level {}",
        dungeon.size(),
        dungeon.size(),
        level
    );
    dungeon
}

fn random_room(rng: &mut impl Rng) -> RoomType {
    *RoomType::ALL
        .choose(rng)
        .unwrap_or(&RoomType::Empty)
}
