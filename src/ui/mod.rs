//! Line-oriented terminal front end.

pub mod character_creation;
pub mod console;
