use std::io::{self, BufRead, Write};

use crate::character::player::{Player, PlayerClass};
use crate::ui::console::Console;

/// Asks for a name and a class. Any class text is accepted; only the three
/// known names earn a bonus. Returns None if input closes midway.
pub fn create_character<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<Option<Player>> {
    let Some(name) = console.prompt("Enter your character's name: ")? else {
        return Ok(None);
    };
    let Some(class) = console.prompt("Choose your class (Warrior, Mage, Archer): ")? else {
        return Ok(None);
    };

    if !PlayerClass::parse(&class).is_recognized() {
        log::debug!("unrecognized class {:?}; no bonus applied", class);
    }
    Ok(Some(Player::new(name, &class)))
}
