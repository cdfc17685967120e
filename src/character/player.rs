//! Player state and progression logic.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::character::archetypes::PlayerArchetype;
use crate::combat::types::Combatant;
use crate::core::combat_math;
use crate::core::constants::{
    LEVEL_UP_DAMAGE_BONUS, LEVEL_UP_HEALTH_BONUS, LEVEL_UP_SPECIAL_BONUS, SPECIAL_MANA_COST,
    XP_PER_LEVEL_STEP,
};

/// Outcome of a special-attack cast.
#[derive(Debug, Clone, Copy)]
pub struct SpecialAttack {
    pub damage: f64,
    /// Mana was short; the cast fell back to a basic attack and no mana
    /// was spent.
    pub fell_back: bool,
}

/// The player character: a combatant plus mana, special damage and the
/// level/experience progression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub combatant: Combatant,
    pub mana: u32,
    pub special_damage: f64,
    pub level: u32,
    pub experience: u64,
}

impl Player {
    pub fn new(name: String, health: f64, base_damage: f64, mana: u32, special_damage: f64) -> Self {
        Self {
            combatant: Combatant::new(name, health, base_damage),
            mana,
            special_damage,
            level: 1,
            experience: 0,
        }
    }

    pub fn from_archetype(archetype: &PlayerArchetype) -> Self {
        Self::new(
            archetype.name.clone(),
            archetype.health as f64,
            archetype.damage as f64,
            archetype.mana,
            archetype.special_damage as f64,
        )
    }

    pub fn name(&self) -> &str {
        &self.combatant.name
    }

    pub fn health(&self) -> f64 {
        self.combatant.health
    }

    pub fn is_alive(&self) -> bool {
        self.combatant.is_alive()
    }

    pub fn attack_roll(&self, rng: &mut impl Rng) -> f64 {
        self.combatant.attack_roll(rng)
    }

    pub fn take_damage(&mut self, amount: f64) {
        self.combatant.take_damage(amount);
    }

    /// Heals without any maximum: health past the starting value is kept.
    pub fn heal(&mut self, amount: f64) {
        self.combatant.health += amount;
    }

    /// Casts the special attack.
    ///
    /// With enough mana, spends [`SPECIAL_MANA_COST`] and rolls special
    /// damage. Otherwise falls back to a basic attack roll; the fallback
    /// never touches mana and is flagged so the encounter can report it.
    pub fn cast_special(&mut self, rng: &mut impl Rng) -> SpecialAttack {
        if self.mana >= SPECIAL_MANA_COST {
            self.mana -= SPECIAL_MANA_COST;
            SpecialAttack {
                damage: combat_math::attack_roll(self.special_damage, rng),
                fell_back: false,
            }
        } else {
            SpecialAttack {
                damage: self.combatant.attack_roll(rng),
                fell_back: true,
            }
        }
    }

    /// Awards experience, then checks the level threshold once.
    ///
    /// The threshold is `level * 50` using the level before any increment,
    /// and a single award fires at most one level-up no matter how far it
    /// overshoots. Experience is carried forward, never reset.
    ///
    /// Returns the new level when a level-up fired.
    pub fn gain_experience(&mut self, amount: u64) -> Option<u32> {
        self.experience += amount;
        if self.experience >= self.level as u64 * XP_PER_LEVEL_STEP {
            Some(self.level_up())
        } else {
            None
        }
    }

    fn level_up(&mut self) -> u32 {
        self.level += 1;
        self.combatant.health += LEVEL_UP_HEALTH_BONUS;
        self.combatant.base_damage += LEVEL_UP_DAMAGE_BONUS;
        self.special_damage += LEVEL_UP_SPECIAL_BONUS;
        self.level
    }
}
