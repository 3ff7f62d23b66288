//! Dungeon grid and its generator.

pub mod generation;
pub mod types;

pub use generation::*;
pub use types::*;
