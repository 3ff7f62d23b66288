//! Turn resolution for a [`Session`].
//!
//! Every function here is a pure transition: it takes the session, one
//! command and (where needed) an RNG, mutates the session and returns the
//! events to display. Nothing reads input, prints, sleeps or touches disk;
//! the interactive driver in `core::game_loop` does that.

use std::fmt;

use rand::Rng;
use thiserror::Error;

use crate::combat::logic::{fight, CombatEvent};
use crate::combat::types::{spawn_enemy, Combatant};
use crate::core::constants::*;
use crate::core::game_state::{Phase, Session};
use crate::dungeon::generation::generate_dungeon;
use crate::dungeon::types::{Direction, RoomType};

/// Answer to the fight-or-flee prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterChoice {
    Fight,
    Flee,
}

impl EncounterChoice {
    /// `f` (any case) fights; everything else flees.
    pub fn parse(input: &str) -> Self {
        if input.eq_ignore_ascii_case("f") {
            EncounterChoice::Fight
        } else {
            EncounterChoice::Flee
        }
    }
}

/// One externally supplied command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Resolve the room at the current position.
    Enter,
    Encounter(EncounterChoice),
    /// `None` means the input was not a recognized direction.
    Move(Option<Direction>),
    Save(bool),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("command {command:?} is not valid in phase {phase:?}")]
    UnexpectedCommand { command: Command, phase: Phase },
}

/// What the player sees, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    TurnStarted { position: (usize, usize), stats: String },
    EnemyEncountered { enemy_stats: String },
    Combat(CombatEvent),
    ItemFound { item: String },
    TrapSprung { damage: u32 },
    SecretFound { item: String },
    ExitFound { new_level: u32 },
    Moved { position: (usize, usize) },
    MoveRejected,
    SaveRequested,
    GameOver,
}

impl GameEvent {
    /// Text for this event, or None for silent state changes.
    pub fn message(&self) -> Option<String> {
        match self {
            GameEvent::TurnStarted { position, stats } => Some(format!(
                "\n{}\nCurrent Position: ({}, {})\n{}",
                "-".repeat(30),
                position.0,
                position.1,
                stats
            )),
            GameEvent::EnemyEncountered { enemy_stats } => {
                Some(format!("\nYou encounter an enemy!\n{}", enemy_stats))
            }
            GameEvent::Combat(event) => event.message(),
            GameEvent::ItemFound { item } => Some(format!("\nYou find a {}!", item)),
            GameEvent::TrapSprung { .. } => Some("\nOh no! You stepped on a trap!".to_string()),
            GameEvent::SecretFound { .. } => {
                Some("\nYou found a secret room with treasure!".to_string())
            }
            GameEvent::ExitFound { new_level } => Some(format!(
                "\nYou found the exit!\nEntering level {}...",
                new_level
            )),
            GameEvent::Moved { .. } => None,
            GameEvent::MoveRejected => Some("Invalid move! Try again.".to_string()),
            GameEvent::SaveRequested => None,
            GameEvent::GameOver => Some("Game Over!".to_string()),
        }
    }

    pub fn is_pause(&self) -> bool {
        matches!(self, GameEvent::Combat(CombatEvent::Pause))
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message().as_deref().unwrap_or(""))
    }
}

/// Applies `command` if the session is in the matching phase.
pub fn handle_command(
    session: &mut Session,
    command: Command,
    rng: &mut impl Rng,
) -> Result<Vec<GameEvent>, GameError> {
    match (session.phase, command) {
        (Phase::RoomEntry, Command::Enter) => Ok(enter_room(session, rng)),
        (Phase::EncounterChoice, Command::Encounter(choice)) => {
            Ok(resolve_encounter(session, choice))
        }
        (Phase::Movement, Command::Move(direction)) => Ok(move_player(session, direction)),
        (Phase::SavePrompt, Command::Save(wants_save)) => Ok(finish_turn(session, wants_save)),
        (phase, command) => Err(GameError::UnexpectedCommand { command, phase }),
    }
}

/// Starts a turn: shows the status block and resolves the current room.
/// A player already at zero health ends the game without a turn.
pub fn enter_room(session: &mut Session, rng: &mut impl Rng) -> Vec<GameEvent> {
    if !session.player.is_alive() {
        session.phase = Phase::GameOver;
        return vec![GameEvent::GameOver];
    }

    let mut events = vec![GameEvent::TurnStarted {
        position: session.position,
        stats: session.player.display_stats(),
    }];

    let (x, y) = session.position;
    let room = session.current_room();
    let mut next_phase = Phase::Movement;

    match room {
        RoomType::Enemy => {
            let enemy = spawn_enemy(DEFAULT_ENEMY_NAME, session.dungeon_level);
            events.push(GameEvent::EnemyEncountered {
                enemy_stats: enemy.display_stats(),
            });
            session.encounter = Some(enemy);
            next_phase = Phase::EncounterChoice;
        }
        RoomType::Item => {
            session.player.add_item(HEALTH_POTION);
            events.push(GameEvent::ItemFound {
                item: HEALTH_POTION.to_string(),
            });
        }
        RoomType::Trap => {
            session.player.take_damage(TRAP_DAMAGE);
            events.push(GameEvent::TrapSprung {
                damage: TRAP_DAMAGE,
            });
        }
        RoomType::Secret => {
            session.player.add_item(GOLD_COIN);
            events.push(GameEvent::SecretFound {
                item: GOLD_COIN.to_string(),
            });
        }
        RoomType::Exit => {
            session.dungeon_level += 1;
            session.dungeon = generate_dungeon(session.dungeon_size, session.dungeon_level, rng);
            session.position = (0, 0);
            log::info!("descending to dungeon level {}", session.dungeon_level);
            events.push(GameEvent::ExitFound {
                new_level: session.dungeon_level,
            });
        }
        RoomType::Empty => {}
    }
    if room.is_one_shot() {
        session.dungeon.clear_room(x, y);
    }

    if !session.player.is_alive() {
        next_phase = Phase::GameOver;
        events.push(GameEvent::GameOver);
    }
    session.phase = next_phase;
    events
}

/// Fights or flees the pending enemy.
///
/// Fleeing leaves the room as an enemy room, so it triggers again on the
/// next visit.
pub fn resolve_encounter(session: &mut Session, choice: EncounterChoice) -> Vec<GameEvent> {
    let Some(mut enemy) = session.encounter.take() else {
        session.phase = Phase::Movement;
        return Vec::new();
    };

    if choice == EncounterChoice::Flee {
        log::debug!("fled from {} at {:?}", enemy.name, session.position);
        session.phase = Phase::Movement;
        return Vec::new();
    }

    let result = fight(&mut session.player, &mut enemy);
    let mut events: Vec<GameEvent> = result.events.into_iter().map(GameEvent::Combat).collect();

    if result.player_won {
        let (x, y) = session.position;
        session.dungeon.clear_room(x, y);
        session.phase = Phase::Movement;
    } else {
        session.phase = Phase::GameOver;
        events.push(GameEvent::GameOver);
    }
    events
}

/// Moves one cell if the target stays inside the grid. A rejected move
/// still uses up the turn.
pub fn move_player(session: &mut Session, direction: Option<Direction>) -> Vec<GameEvent> {
    session.phase = Phase::SavePrompt;

    let size = session.dungeon.size();
    match direction.and_then(|d| d.step(session.position, size)) {
        Some(position) => {
            session.position = position;
            vec![GameEvent::Moved { position }]
        }
        None => vec![GameEvent::MoveRejected],
    }
}

/// Closes the turn. The caller performs the actual write when
/// [`GameEvent::SaveRequested`] is returned.
pub fn finish_turn(session: &mut Session, wants_save: bool) -> Vec<GameEvent> {
    session.phase = Phase::RoomEntry;
    if wants_save {
        vec![GameEvent::SaveRequested]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::player::Player;
    use crate::dungeon::types::Dungeon;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(11)
    }

    /// Session on an all-empty grid with `room` placed at the origin.
    fn session_with(room: RoomType, class: &str) -> Session {
        let dungeon = Dungeon::from_fn(5, |x, y| {
            if (x, y) == (0, 0) {
                room
            } else {
                RoomType::Empty
            }
        });
        Session::resume(Player::new("Rin".to_string(), class), dungeon, 5)
    }

    #[test]
    fn test_trap_deals_flat_damage_once() {
        let mut session = session_with(RoomType::Trap, "Warrior");
        let events = enter_room(&mut session, &mut rng());

        // Defense 10 does not mitigate trap damage
        assert_eq!(session.player.health, 90);
        assert!(events.contains(&GameEvent::TrapSprung { damage: 10 }));
        assert_eq!(session.current_room(), RoomType::Empty);
        assert_eq!(session.phase, Phase::Movement);

        session.phase = Phase::RoomEntry;
        enter_room(&mut session, &mut rng());
        assert_eq!(session.player.health, 90);
    }

    #[test]
    fn test_item_room_grants_potion() {
        let mut session = session_with(RoomType::Item, "Mage");
        let events = enter_room(&mut session, &mut rng());
        assert_eq!(session.player.inventory, vec!["Health Potion".to_string()]);
        assert_eq!(session.current_room(), RoomType::Empty);
        assert!(events.contains(&GameEvent::ItemFound {
            item: "Health Potion".to_string()
        }));
    }

    #[test]
    fn test_secret_room_grants_gold() {
        let mut session = session_with(RoomType::Secret, "Archer");
        enter_room(&mut session, &mut rng());
        assert_eq!(session.player.inventory, vec!["Gold Coin".to_string()]);
        assert_eq!(session.current_room(), RoomType::Empty);
    }

    #[test]
    fn test_empty_room_has_no_effect() {
        let mut session = session_with(RoomType::Empty, "Warrior");
        let before = session.player.clone();
        let events = enter_room(&mut session, &mut rng());
        assert_eq!(session.player, before);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], GameEvent::TurnStarted { .. }));
    }

    #[test]
    fn test_enemy_encounter_scales_with_dungeon_level_not_player_level() {
        let mut session = session_with(RoomType::Enemy, "Warrior");
        session.dungeon_level = 3;
        session.player.level = 7;

        enter_room(&mut session, &mut rng());

        let enemy = session.encounter.as_ref().unwrap();
        assert_eq!(enemy.name, "Goblin");
        assert_eq!(enemy.level, 3);
        assert_eq!(enemy.health, 80);
        assert_eq!(session.phase, Phase::EncounterChoice);
    }

    #[test]
    fn test_flee_leaves_enemy_room() {
        let mut session = session_with(RoomType::Enemy, "Warrior");
        enter_room(&mut session, &mut rng());

        let events = resolve_encounter(&mut session, EncounterChoice::Flee);

        assert!(events.is_empty());
        assert!(session.encounter.is_none());
        assert_eq!(session.current_room(), RoomType::Enemy);
        assert_eq!(session.phase, Phase::Movement);
        assert_eq!(session.player.health, 100);
    }

    #[test]
    fn test_fight_and_win_clears_room() {
        let mut session = session_with(RoomType::Enemy, "Warrior");
        enter_room(&mut session, &mut rng());

        let events = resolve_encounter(&mut session, EncounterChoice::Fight);

        assert_eq!(session.current_room(), RoomType::Empty);
        assert_eq!(session.player.experience, 20);
        assert_eq!(session.player.inventory, vec!["Health Potion".to_string()]);
        assert_eq!(session.phase, Phase::Movement);
        let hits = events
            .iter()
            .filter(|e| matches!(e, GameEvent::Combat(CombatEvent::PlayerAttack { .. })))
            .count();
        assert_eq!(hits, 6);
    }

    #[test]
    fn test_fight_and_lose_ends_game() {
        let mut session = session_with(RoomType::Enemy, "Nobody");
        session.dungeon_level = 12;
        session.player.health = 20;
        enter_room(&mut session, &mut rng());

        let events = resolve_encounter(&mut session, EncounterChoice::Fight);

        assert_eq!(session.player.health, 0);
        assert!(session.is_over());
        assert_eq!(events.last(), Some(&GameEvent::GameOver));
        assert_eq!(session.current_room(), RoomType::Enemy);
    }

    #[test]
    fn test_lethal_trap_ends_game() {
        let mut session = session_with(RoomType::Trap, "Warrior");
        session.player.health = 10;
        let events = enter_room(&mut session, &mut rng());
        assert!(session.is_over());
        assert_eq!(events.last(), Some(&GameEvent::GameOver));
    }

    #[test]
    fn test_dead_player_ends_game_on_entry() {
        let mut session = session_with(RoomType::Secret, "Warrior");
        session.player.health = 0;

        let events = enter_room(&mut session, &mut rng());

        assert_eq!(events, vec![GameEvent::GameOver]);
        assert!(session.is_over());
        assert!(session.player.inventory.is_empty());
        assert_eq!(session.current_room(), RoomType::Secret);
    }

    #[test]
    fn test_exit_regenerates_and_resets_position() {
        let mut session = session_with(RoomType::Empty, "Warrior");
        session.dungeon.set_room(2, 3, RoomType::Exit);
        session.position = (2, 3);

        let events = enter_room(&mut session, &mut rng());

        assert_eq!(session.dungeon_level, 2);
        assert_eq!(session.player.level, 1);
        assert_eq!(session.position, (0, 0));
        assert_eq!(session.dungeon.size(), 5);
        assert!(events.contains(&GameEvent::ExitFound { new_level: 2 }));
        assert_eq!(session.phase, Phase::Movement);

        // The move of this turn is applied from the origin
        move_player(&mut session, Some(Direction::East));
        assert_eq!(session.position, (0, 1));
    }

    #[test]
    fn test_moves_within_bounds() {
        let mut session = session_with(RoomType::Empty, "Warrior");
        session.phase = Phase::Movement;
        let events = move_player(&mut session, Some(Direction::South));
        assert_eq!(session.position, (1, 0));
        assert_eq!(events, vec![GameEvent::Moved { position: (1, 0) }]);
        assert_eq!(session.phase, Phase::SavePrompt);

        move_player(&mut session, Some(Direction::East));
        assert_eq!(session.position, (1, 1));
        move_player(&mut session, Some(Direction::North));
        assert_eq!(session.position, (0, 1));
        move_player(&mut session, Some(Direction::West));
        assert_eq!(session.position, (0, 0));
    }

    #[test]
    fn test_out_of_bounds_move_is_rejected() {
        let mut session = session_with(RoomType::Empty, "Warrior");
        let events = move_player(&mut session, Some(Direction::North));
        assert_eq!(events, vec![GameEvent::MoveRejected]);
        assert_eq!(session.position, (0, 0));
        assert_eq!(session.phase, Phase::SavePrompt);

        session.position = (4, 4);
        move_player(&mut session, Some(Direction::South));
        move_player(&mut session, Some(Direction::East));
        assert_eq!(session.position, (4, 4));
    }

    #[test]
    fn test_unknown_direction_consumes_turn() {
        let mut session = session_with(RoomType::Empty, "Warrior");
        let events = move_player(&mut session, None);
        assert_eq!(events, vec![GameEvent::MoveRejected]);
        assert_eq!(session.phase, Phase::SavePrompt);
    }

    #[test]
    fn test_finish_turn() {
        let mut session = session_with(RoomType::Empty, "Warrior");
        session.phase = Phase::SavePrompt;
        assert_eq!(finish_turn(&mut session, true), vec![GameEvent::SaveRequested]);
        assert_eq!(session.phase, Phase::RoomEntry);
        session.phase = Phase::SavePrompt;
        assert!(finish_turn(&mut session, false).is_empty());
    }

    #[test]
    fn test_handle_command_enforces_phase() {
        let mut session = session_with(RoomType::Empty, "Warrior");
        let mut rng = rng();

        let err = handle_command(&mut session, Command::Move(Some(Direction::East)), &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            GameError::UnexpectedCommand {
                command: Command::Move(Some(Direction::East)),
                phase: Phase::RoomEntry
            }
        );

        handle_command(&mut session, Command::Enter, &mut rng).unwrap();
        handle_command(&mut session, Command::Move(Some(Direction::East)), &mut rng).unwrap();
        assert_eq!(session.position, (0, 1));
        let events = handle_command(&mut session, Command::Save(true), &mut rng).unwrap();
        assert_eq!(events, vec![GameEvent::SaveRequested]);
        assert_eq!(session.phase, Phase::RoomEntry);
    }

    #[test]
    fn test_game_over_accepts_nothing() {
        let mut session = session_with(RoomType::Empty, "Warrior");
        session.phase = Phase::GameOver;
        assert!(handle_command(&mut session, Command::Enter, &mut rng()).is_err());
    }

    #[test]
    fn test_encounter_choice_parse() {
        assert_eq!(EncounterChoice::parse("f"), EncounterChoice::Fight);
        assert_eq!(EncounterChoice::parse("F"), EncounterChoice::Fight);
        assert_eq!(EncounterChoice::parse("l"), EncounterChoice::Flee);
        assert_eq!(EncounterChoice::parse("fight"), EncounterChoice::Flee);
        assert_eq!(EncounterChoice::parse(""), EncounterChoice::Flee);
    }

    #[test]
    fn test_event_messages() {
        assert_eq!(
            GameEvent::ExitFound { new_level: 3 }.to_string(),
            "\nYou found the exit!\nEntering level 3..."
        );
        assert_eq!(GameEvent::MoveRejected.to_string(), "Invalid move! Try again.");
        assert_eq!(GameEvent::Moved { position: (1, 1) }.message(), None);
        let turn = GameEvent::TurnStarted {
            position: (2, 4),
            stats: "stats".to_string(),
        };
        assert!(turn.to_string().contains("Current Position: (2, 4)"));
    }
}
