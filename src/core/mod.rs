//! Session state, turn resolution and the interactive loop.

pub mod config;
pub mod constants;
pub mod game_logic;
pub mod game_loop;
pub mod game_state;

pub use game_logic::*;
pub use game_state::*;
