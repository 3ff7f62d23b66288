use std::fmt;

use crate::combat::types::Combatant;
use crate::core::constants::*;

/// Character class chosen at creation. Unknown names are kept verbatim and
/// grant no bonus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerClass {
    Warrior,
    Mage,
    Archer,
    Other(String),
}

impl PlayerClass {
    /// Exact, case-sensitive match against the three known class names.
    pub fn parse(name: &str) -> Self {
        match name {
            "Warrior" => PlayerClass::Warrior,
            "Mage" => PlayerClass::Mage,
            "Archer" => PlayerClass::Archer,
            other => PlayerClass::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PlayerClass::Warrior => "Warrior",
            PlayerClass::Mage => "Mage",
            PlayerClass::Archer => "Archer",
            PlayerClass::Other(name) => name,
        }
    }

    /// (attack, defense) bonus applied once at creation.
    pub fn bonus(&self) -> (u32, u32) {
        match self {
            PlayerClass::Warrior => WARRIOR_BONUS,
            PlayerClass::Mage => MAGE_BONUS,
            PlayerClass::Archer => ARCHER_BONUS,
            PlayerClass::Other(_) => (0, 0),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, PlayerClass::Other(_))
    }
}

impl fmt::Display for PlayerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub player_class: PlayerClass,
    pub health: u32,
    pub attack: u32,
    pub defense: u32,
    pub inventory: Vec<String>,
    pub experience: u32,
    pub level: u32,
}

impl Player {
    pub fn new(name: String, player_class: &str) -> Self {
        let player_class = PlayerClass::parse(player_class);
        let (attack_bonus, defense_bonus) = player_class.bonus();

        Self {
            name,
            player_class,
            health: PLAYER_BASE_HEALTH,
            attack: PLAYER_BASE_ATTACK + attack_bonus,
            defense: PLAYER_BASE_DEFENSE + defense_bonus,
            inventory: Vec::new(),
            experience: 0,
            level: 1,
        }
    }

    /// Restores health, capped at the player maximum.
    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(PLAYER_MAX_HEALTH);
    }

    pub fn add_item(&mut self, item: &str) {
        self.inventory.push(item.to_string());
    }

    pub fn gain_experience(&mut self, amount: u32) {
        self.experience = self.experience.saturating_add(amount);
    }

    /// Experience needed to fire the next level-up.
    pub fn xp_threshold(&self) -> u32 {
        XP_PER_LEVEL.saturating_mul(self.level)
    }

    /// Advances one level if `experience >= 100 * level`.
    ///
    /// Experience is not consumed, so a second call may fire again.
    /// Returns true when the level changed.
    pub fn level_up(&mut self) -> bool {
        if self.experience < self.xp_threshold() {
            return false;
        }
        self.level = self.level.saturating_add(1);
        self.attack = self.attack.saturating_add(LEVEL_UP_ATTACK_GAIN);
        self.defense = self.defense.saturating_add(LEVEL_UP_DEFENSE_GAIN);
        log::info!("{} reached level {}", self.name, self.level);
        true
    }

    /// Renders the three-line status block shown at the start of each turn.
    pub fn display_stats(&self) -> String {
        let inventory = if self.inventory.is_empty() {
            "Empty".to_string()
        } else {
            self.inventory.join(", ")
        };
        format!(
            "Name: {} | Class: {} | Health: {} | Attack: {} | Defense: {}\n\
             Level: {} | Experience: {}\n\
             Inventory: {}",
            self.name,
            self.player_class,
            self.health,
            self.attack,
            self.defense,
            self.level,
            self.experience,
            inventory
        )
    }
}

impl Combatant for Player {
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
