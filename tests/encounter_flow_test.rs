//! Integration test: Encounter flow
//!
//! Tests the full round loop through the public API: kill/respawn cycling,
//! terminal state handling, and seeding the encounter from JSON catalogs.

use rand::rngs::mock::StepRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skirmish::{Action, CombatEvent, Encounter, MonsterTemplate, Player};

/// All-max rolls: fumble checks never trip, damage rolls land just under
/// the top of the band.
fn never_fumble_rng() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

fn warrior() -> Player {
    Player::new("Guerrier".to_string(), 100.0, 15.0, 30, 25.0)
}

fn goblin_only_catalog() -> Vec<MonsterTemplate> {
    vec![MonsterTemplate {
        name: "Gobelin".to_string(),
        health: 30,
        damage: 5,
        experience: 20,
    }]
}

// =============================================================================
// Full session
// =============================================================================

#[test]
fn test_attack_only_session_runs_to_game_over() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    // Dragons hit for 16-24 against 100 health that never regenerates, and
    // 5 XP per kill keeps the first level-up out of reach, so an
    // attack-only session must end.
    let catalog = vec![MonsterTemplate {
        name: "Dragon".to_string(),
        health: 100,
        damage: 20,
        experience: 5,
    }];
    let mut encounter = Encounter::new(warrior(), catalog, &mut rng).unwrap();

    let mut game_overs = 0;
    let mut defeats = 0;
    let mut last_level = 1;
    let mut last_experience = 0;

    for _ in 0..10_000 {
        if encounter.is_over() {
            break;
        }
        for event in encounter.submit_action(Action::Attack, &mut rng) {
            match event {
                CombatEvent::GameOver { .. } => game_overs += 1,
                CombatEvent::MonsterDefeated { .. } => defeats += 1,
                _ => {}
            }
        }

        // Progression is monotonic
        assert!(encounter.player().level >= last_level);
        assert!(encounter.player().experience >= last_experience);
        last_level = encounter.player().level;
        last_experience = encounter.player().experience;
    }

    // An attack-only warrior never heals, so the session must end
    assert!(encounter.is_over(), "session did not terminate");
    assert_eq!(game_overs, 1, "game over must fire exactly once");
    assert_eq!(defeats, encounter.monsters_killed());
    assert!(encounter.player().health() <= 0.0);
    assert!(!encounter.player().is_alive());
}

// =============================================================================
// Kill / respawn cycle
// =============================================================================

#[test]
fn test_killing_blow_respawns_a_fresh_monster() {
    let mut rng = never_fumble_rng();
    let mut encounter = Encounter::new(warrior(), goblin_only_catalog(), &mut rng).unwrap();

    for round in 0..100 {
        let events = encounter.submit_action(Action::Attack, &mut rng);
        let killed = events
            .iter()
            .any(|e| matches!(e, CombatEvent::MonsterDefeated { .. }));
        if killed {
            // Replacement is immediate and at full health
            assert_eq!(encounter.current_monster().health(), 30.0);
            assert!(encounter.current_monster().is_alive());
            // The monster died before its turn, so no counter-attack
            // happened on the kill round
            assert!(!events.iter().any(|e| matches!(
                e,
                CombatEvent::DamageDealt { attacker, .. } if attacker == "Gobelin"
            )));
            return;
        }
        assert!(round < 99, "no kill in 100 rounds");
    }
}

#[test]
fn test_kill_events_match_kill_counter() {
    let mut rng = never_fumble_rng();
    let mut encounter = Encounter::new(warrior(), goblin_only_catalog(), &mut rng).unwrap();

    let mut defeats = 0;
    let mut rounds = 0;
    while encounter.monsters_killed() < 10 {
        rounds += 1;
        assert!(rounds < 100, "10 kills should take well under 100 rounds");
        defeats += encounter
            .submit_action(Action::Attack, &mut rng)
            .iter()
            .filter(|e| matches!(e, CombatEvent::MonsterDefeated { .. }))
            .count() as u32;
    }

    assert_eq!(defeats, 10);
    assert_eq!(encounter.monsters_killed(), 10);
}

// =============================================================================
// JSON catalogs
// =============================================================================

#[test]
fn test_encounter_runs_on_a_json_bestiary() {
    let raw = r#"[
        {"name": "Slime", "health": 10, "damage": 1, "experience": 5},
        {"name": "Rat géant", "health": 12, "damage": 2, "experience": 6}
    ]"#;
    let catalog: Vec<MonsterTemplate> = serde_json::from_str(raw).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(31);
    let mut encounter = Encounter::new(warrior(), catalog, &mut rng).unwrap();

    let allowed = ["Slime", "Rat géant", "Guerrier"];
    for _ in 0..50 {
        if encounter.is_over() {
            break;
        }
        for event in encounter.submit_action(Action::Attack, &mut rng) {
            if let CombatEvent::DamageDealt {
                attacker, defender, ..
            } = event
            {
                assert!(allowed.contains(&attacker.as_str()), "attacker {}", attacker);
                assert!(allowed.contains(&defender.as_str()), "defender {}", defender);
            }
        }
    }
}
