//! Selectable player archetypes (seed data).

use serde::{Deserialize, Serialize};

/// Starting stats for a playable character class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerArchetype {
    pub name: String,
    pub health: u32,
    pub damage: u32,
    pub mana: u32,
    pub special_damage: u32,
}

/// Returns the built-in archetype roster.
pub fn default_archetypes() -> Vec<PlayerArchetype> {
    vec![
        PlayerArchetype {
            name: "Guerrier".to_string(),
            health: 100,
            damage: 15,
            mana: 30,
            special_damage: 25,
        },
        PlayerArchetype {
            name: "Magicien".to_string(),
            health: 80,
            damage: 10,
            mana: 50,
            special_damage: 35,
        },
    ]
}

/// Finds an archetype by name, case-insensitively.
pub fn find_archetype<'a>(
    catalog: &'a [PlayerArchetype],
    name: &str,
) -> Option<&'a PlayerArchetype> {
    catalog.iter().find(|a| a.name.eq_ignore_ascii_case(name))
}
