//! Player model and persistence.

pub mod player;
pub mod save;

pub use player::*;
pub use save::*;
