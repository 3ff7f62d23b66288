use std::fmt;

use crate::character::player::Player;
use crate::combat::types::{Combatant, Enemy};
use crate::core::constants::*;

/// Something that happened during a fight, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    PlayerAttack { enemy_name: String, damage: u32 },
    EnemyAttack { enemy_name: String, damage: u32 },
    /// Cosmetic pacing point between exchanges.
    Pause,
    PlayerDied,
    EnemyDied { xp_gained: u32, loot: String },
    LeveledUp { name: String, level: u32 },
}

impl CombatEvent {
    /// Line shown to the player, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            CombatEvent::PlayerAttack { enemy_name, damage } => {
                Some(format!("You attack the {} for {} damage!", enemy_name, damage))
            }
            CombatEvent::EnemyAttack { enemy_name, damage } => {
                Some(format!("The {} attacks you for {} damage!", enemy_name, damage))
            }
            CombatEvent::Pause => None,
            CombatEvent::PlayerDied => Some("\nYou have been defeated!".to_string()),
            CombatEvent::EnemyDied { .. } => Some("\nYou defeated the enemy!".to_string()),
            CombatEvent::LeveledUp { name, level } => {
                Some(format!("{} leveled up to level {}!", name, level))
            }
        }
    }
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message().as_deref().unwrap_or(""))
    }
}

/// Outcome of a fight to the finish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatResult {
    pub events: Vec<CombatEvent>,
    pub player_won: bool,
}

/// Runs exchanges until one side drops to zero health.
///
/// Each exchange is: player attacks; if the enemy survives, pause and the
/// enemy strikes back; pause. Rewards are applied on a win.
pub fn fight(player: &mut Player, enemy: &mut Enemy) -> CombatResult {
    let mut events = Vec::new();

    while player.is_alive() && enemy.is_alive() {
        let damage = player.attack_against(enemy);
        events.push(CombatEvent::PlayerAttack {
            enemy_name: enemy.name.clone(),
            damage,
        });

        if enemy.is_alive() {
            events.push(CombatEvent::Pause);
            let damage = enemy.attack_against(player);
            events.push(CombatEvent::EnemyAttack {
                enemy_name: enemy.name.clone(),
                damage,
            });
        }
        events.push(CombatEvent::Pause);

        if !player.is_alive() {
            events.push(CombatEvent::PlayerDied);
            log::info!("{} was defeated by a level {} {}", player.name, enemy.level, enemy.name);
            return CombatResult {
                events,
                player_won: false,
            };
        }
    }

    log::info!("{} defeated a level {} {}", player.name, enemy.level, enemy.name);
    events.extend(on_enemy_defeated(player));
    CombatResult {
        events,
        player_won: true,
    }
}

/// Grants the fixed victory rewards: experience, one level-up check and a
/// health potion.
pub fn on_enemy_defeated(player: &mut Player) -> Vec<CombatEvent> {
    let mut events = vec![CombatEvent::EnemyDied {
        xp_gained: XP_PER_ENEMY,
        loot: HEALTH_POTION.to_string(),
    }];

    player.gain_experience(XP_PER_ENEMY);
    if player.level_up() {
        events.push(CombatEvent::LeveledUp {
            name: player.name.clone(),
            level: player.level,
        });
    }
    player.add_item(HEALTH_POTION);

    events
}
