// Turn resolution
pub const CRITICAL_FAILURE_CHANCE: f64 = 0.10;

// Damage roll multiplier band (half-open: 1.2 is never rolled)
pub const DAMAGE_ROLL_MIN: f64 = 0.8;
pub const DAMAGE_ROLL_MAX: f64 = 1.2;

// Resources
pub const SPECIAL_MANA_COST: u32 = 10;
pub const HEAL_AMOUNT: f64 = 30.0;

// XP and leveling: next level requires level * XP_PER_LEVEL_STEP total XP
pub const XP_PER_LEVEL_STEP: u64 = 50;
pub const LEVEL_UP_HEALTH_BONUS: f64 = 20.0;
pub const LEVEL_UP_DAMAGE_BONUS: f64 = 5.0;
pub const LEVEL_UP_SPECIAL_BONUS: f64 = 5.0;
