//! Default bestiary seed data.

use crate::combat::types::MonsterTemplate;

/// Returns the built-in monster catalog.
pub fn default_bestiary() -> Vec<MonsterTemplate> {
    vec![
        MonsterTemplate {
            name: "Gobelin".to_string(),
            health: 30,
            damage: 5,
            experience: 20,
        },
        MonsterTemplate {
            name: "Orc".to_string(),
            health: 50,
            damage: 10,
            experience: 30,
        },
        MonsterTemplate {
            name: "Dragon".to_string(),
            health: 100,
            damage: 20,
            experience: 50,
        },
    ]
}
