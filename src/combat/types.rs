use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::combat_math;

/// Base record shared by every fighting entity.
///
/// Health is `f64` because damage rolls are fractional; it is never clamped
/// and may go negative once a killing blow lands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub health: f64,
    pub base_damage: f64,
}

impl Combatant {
    pub fn new(name: String, health: f64, base_damage: f64) -> Self {
        Self {
            name,
            health,
            base_damage,
        }
    }

    /// Rolls this combatant's basic attack damage.
    pub fn attack_roll(&self, rng: &mut impl Rng) -> f64 {
        combat_math::attack_roll(self.base_damage, rng)
    }

    pub fn take_damage(&mut self, amount: f64) {
        self.health = combat_math::apply_damage(self.health, amount);
    }

    pub fn is_alive(&self) -> bool {
        combat_math::is_alive(self.health)
    }
}

/// Read-only bestiary entry used to stamp out fresh monsters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterTemplate {
    pub name: String,
    pub health: u32,
    pub damage: u32,
    pub experience: u64,
}

/// A spawned monster. Ephemeral: replaced wholesale when it dies, with no
/// identity carried across spawns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monster {
    pub combatant: Combatant,
    /// Experience granted to the killer.
    pub experience_reward: u64,
}

impl Monster {
    pub fn from_template(template: &MonsterTemplate) -> Self {
        Self {
            combatant: Combatant::new(
                template.name.clone(),
                template.health as f64,
                template.damage as f64,
            ),
            experience_reward: template.experience,
        }
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

    pub fn take_damage(&mut self, amount: f64) {
        self.combatant.take_damage(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goblin_template() -> MonsterTemplate {
        MonsterTemplate {
            name: "Gobelin".to_string(),
            health: 30,
            damage: 5,
            experience: 20,
        }
    }

    #[test]
    fn test_from_template_spawns_at_full_health() {
        let monster = Monster::from_template(&goblin_template());
        assert_eq!(monster.name(), "Gobelin");
        assert_eq!(monster.health(), 30.0);
        assert_eq!(monster.experience_reward, 20);
        assert!(monster.is_alive());
    }

    #[test]
    fn test_spawns_are_independent() {
        let template = goblin_template();
        let mut first = Monster::from_template(&template);
        first.take_damage(25.0);
        let second = Monster::from_template(&template);
        assert_eq!(second.health(), 30.0);
    }

    #[test]
    fn test_take_damage_can_go_negative() {
        let mut monster = Monster::from_template(&goblin_template());
        monster.take_damage(45.5);
        assert_eq!(monster.health(), -15.5);
        assert!(!monster.is_alive());
    }

    #[test]
    fn test_exactly_zero_health_is_dead() {
        let mut combatant = Combatant::new("Test".to_string(), 10.0, 5.0);
        combatant.take_damage(10.0);
        assert_eq!(combatant.health, 0.0);
        assert!(!combatant.is_alive());
    }
}
