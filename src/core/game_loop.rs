//! Interactive driver: start menu plus the turn loop.
//!
//! Reads answers through a [`Console`], feeds them to
//! [`handle_command`] as commands, renders the resulting events and
//! performs the save I/O the pure logic asks for.

use std::io::{BufRead, Write};

use anyhow::Result;
use rand::Rng;

use crate::character::save::SaveManager;
use crate::core::config::GameConfig;
use crate::core::game_logic::{handle_command, Command, EncounterChoice, GameEvent};
use crate::core::game_state::{Phase, Session};
use crate::dungeon::types::Direction;
use crate::ui::character_creation::create_character;
use crate::ui::console::Console;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Player health reached zero.
    Defeated,
    /// Start menu answer was neither new nor load.
    InvalidChoice,
    /// Input stream closed before the game ended.
    InputClosed,
}

enum MenuResult {
    Start(Session),
    Retry,
    Exit(GameOutcome),
}

/// Runs a full session: welcome, start menu, then turns until defeat.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> Result<GameOutcome> {
    console.say("Welcome to the Dungeon Crawler!")?;
    let saves = SaveManager::new(config.save_path.clone());

    let session = loop {
        match start_menu(console, config, &saves, rng)? {
            MenuResult::Start(session) => break session,
            MenuResult::Retry => continue,
            MenuResult::Exit(outcome) => return Ok(outcome),
        }
    };

    play(console, session, &saves, rng)
}

fn start_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &GameConfig,
    saves: &SaveManager,
    rng: &mut impl Rng,
) -> Result<MenuResult> {
    let Some(choice) = console.prompt("Do you want to (n)ew game or (l)oad game? ")? else {
        return Ok(MenuResult::Exit(GameOutcome::InputClosed));
    };

    match choice.to_lowercase().as_str() {
        "n" => match create_character(console)? {
            Some(player) => {
                log::info!("new game for {} the {}", player.name, player.player_class);
                Ok(MenuResult::Start(Session::new(
                    player,
                    config.dungeon_size,
                    rng,
                )))
            }
            None => Ok(MenuResult::Exit(GameOutcome::InputClosed)),
        },
        "l" => match saves.load() {
            Ok(data) => Ok(MenuResult::Start(data.into_session(config.dungeon_size))),
            Err(e) => {
                log::warn!("load from {} failed: {}", saves.save_path().display(), e);
                console.say(&format!("Could not load save: {}", e))?;
                Ok(MenuResult::Retry)
            }
        },
        _ => {
            console.say("Invalid choice. Exiting.")?;
            Ok(MenuResult::Exit(GameOutcome::InvalidChoice))
        }
    }
}

/// Turn loop. Returns once the player is defeated or input closes.
pub fn play<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mut session: Session,
    saves: &SaveManager,
    rng: &mut impl Rng,
) -> Result<GameOutcome> {
    loop {
        let command = match session.phase {
            Phase::GameOver => return Ok(GameOutcome::Defeated),
            Phase::RoomEntry => Command::Enter,
            Phase::EncounterChoice => {
                match console.prompt("Do you want to fight (f) or flee (l)? ")? {
                    Some(answer) => Command::Encounter(EncounterChoice::parse(&answer)),
                    None => return Ok(GameOutcome::InputClosed),
                }
            }
            Phase::Movement => match console.prompt("\nWhere do you want to go? (w/a/s/d) ")? {
                Some(answer) => Command::Move(Direction::from_key(&answer)),
                None => return Ok(GameOutcome::InputClosed),
            },
            Phase::SavePrompt => {
                match console.prompt("Do you want to save the game? (y/n): ")? {
                    Some(answer) => Command::Save(answer.eq_ignore_ascii_case("y")),
                    None => return Ok(GameOutcome::InputClosed),
                }
            }
        };

        let events = handle_command(&mut session, command, rng)?;
        console.show(&events)?;

        if events.contains(&GameEvent::SaveRequested) {
            match saves.save(&session) {
                Ok(()) => console.say("Game saved.")?,
                Err(e) => {
                    log::warn!("save to {} failed: {}", saves.save_path().display(), e);
                    console.say(&format!("Could not save game: {}", e))?;
                }
            }
        }
        if matches!(command, Command::Save(_)) {
            console.pause()?;
        }
    }
}
