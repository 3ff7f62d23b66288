//! Crawler - Turn-Based Grid Dungeon Crawler Library
//!
//! Game rules live in pure modules (`character`, `combat`, `dungeon`,
//! `core::game_logic`) so they can be tested without a terminal. The
//! interactive driver in `core::game_loop` wires them to a [`ui::console::Console`].

pub mod build_info;
pub mod character;
pub mod combat;
pub mod core;
pub mod dungeon;
pub mod ui;
