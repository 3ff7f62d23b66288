use crate::core::constants::*;

/// Anything that can deal and receive damage.
///
/// Implemented by [`crate::character::Player`] and [`Enemy`]. Damage is
/// unsigned, so `take_damage` can never be used to heal.
pub trait Combatant {
    fn health(&self) -> u32;
    fn attack_power(&self) -> u32;
    fn defense(&self) -> u32;

    /// Subtracts `amount` from health, stopping at zero.
    fn take_damage(&mut self, amount: u32);

    fn is_alive(&self) -> bool {
        self.health() > 0
    }

    /// Hits `target` for `max(0, attack - target.defense)` and returns the
    /// damage dealt. No variance.
    fn attack_against<T: Combatant>(&self, target: &mut T) -> u32 {
        let damage = damage_against(self.attack_power(), target.defense());
        target.take_damage(damage);
        damage
    }
}

/// Flat damage formula shared by both sides of a fight.
pub fn damage_against(attack: u32, defense: u32) -> u32 {
    attack.saturating_sub(defense)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    pub name: String,
    pub level: u32,
    pub health: u32,
    pub attack: u32,
    pub defense: u32,
}

impl Enemy {
    pub fn new(name: String, level: u32) -> Self {
        Self {
            name,
            level,
            health: ENEMY_BASE_HEALTH + level * ENEMY_HEALTH_PER_LEVEL,
            attack: ENEMY_BASE_ATTACK + level * ENEMY_ATTACK_PER_LEVEL,
            defense: ENEMY_BASE_DEFENSE + level * ENEMY_DEFENSE_PER_LEVEL,
        }
    }

    pub fn display_stats(&self) -> String {
        format!(
            "{} | Level: {} | Health: {} | Attack: {} | Defense: {}",
            self.name, self.level, self.health, self.attack, self.defense
        )
    }
}

impl Combatant for Enemy {
    fn health(&self) -> u32 {
        self.health
    }

    fn attack_power(&self) -> u32 {
        self.attack
    }

    fn defense(&self) -> u32 {
        self.defense
    }

    fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }
}

/// Builds an enemy whose stats scale linearly with the dungeon level.
pub fn spawn_enemy(name: &str, dungeon_level: u32) -> Enemy {
    Enemy::new(name.to_string(), dungeon_level)
}
