// Player base stats
pub const PLAYER_BASE_HEALTH: u32 = 100;
pub const PLAYER_MAX_HEALTH: u32 = 100;
pub const PLAYER_BASE_ATTACK: u32 = 10;
pub const PLAYER_BASE_DEFENSE: u32 = 5;

// Class bonuses: (attack, defense)
pub const WARRIOR_BONUS: (u32, u32) = (5, 5);
pub const MAGE_BONUS: (u32, u32) = (10, 2);
pub const ARCHER_BONUS: (u32, u32) = (7, 3);

// Leveling
pub const XP_PER_LEVEL: u32 = 100; // threshold = XP_PER_LEVEL * level
pub const LEVEL_UP_ATTACK_GAIN: u32 = 5;
pub const LEVEL_UP_DEFENSE_GAIN: u32 = 3;

// Enemy scaling: base + level * step
pub const ENEMY_BASE_HEALTH: u32 = 50;
pub const ENEMY_HEALTH_PER_LEVEL: u32 = 10;
pub const ENEMY_BASE_ATTACK: u32 = 8;
pub const ENEMY_ATTACK_PER_LEVEL: u32 = 2;
pub const ENEMY_BASE_DEFENSE: u32 = 3;
pub const ENEMY_DEFENSE_PER_LEVEL: u32 = 1;
pub const DEFAULT_ENEMY_NAME: &str = "Goblin";

// Rewards and hazards
pub const XP_PER_ENEMY: u32 = 20;
pub const TRAP_DAMAGE: u32 = 10;
pub const HEALTH_POTION: &str = "Health Potion";
pub const GOLD_COIN: &str = "Gold Coin";

// Dungeon
pub const DEFAULT_DUNGEON_SIZE: usize = 5;
pub const STARTING_DUNGEON_LEVEL: u32 = 1;

// Session glue
pub const DEFAULT_SAVE_FILE: &str = "savegame.json";
pub const DEFAULT_PACING_MS: u64 = 1000;
