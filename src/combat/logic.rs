//! Encounter orchestration: turn resolution, monster respawn, experience
//! awards and the terminal game-over state.
//!
//! The encounter owns the current monster (replaced wholesale when it dies)
//! and the player, resolves one full round per submitted [`Action`], and
//! returns the [`CombatEvent`]s that occurred so the presentation layer can
//! render them without game logic depending on any UI types.

use std::str::FromStr;

use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::character::player::Player;
use crate::combat::types::{Monster, MonsterTemplate};
use crate::core::constants::{CRITICAL_FAILURE_CHANCE, HEAL_AMOUNT};

/// An action the player can submit for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Attack,
    Special,
    Heal,
}

/// Unknown action kinds are rejected at the parsing boundary rather than
/// silently ignored during turn resolution.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown action `{0}`, expected `attack`, `special` or `heal`")]
pub struct ActionParseError(String);

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "attack" => Ok(Action::Attack),
            "special" => Ok(Action::Special),
            "heal" => Ok(Action::Heal),
            other => Err(ActionParseError(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum EncounterError {
    #[error("monster catalog is empty")]
    EmptyCatalog,
}

/// A single event produced while resolving a round.
///
/// The presentation layer renders `message`; the typed fields carry the raw
/// numbers for callers that want them.
#[derive(Debug, Clone)]
pub enum CombatEvent {
    /// The acting combatant fumbled and wasted the turn.
    CriticalFailure { actor: String, message: String },

    /// Attacker landed a hit on defender.
    DamageDealt {
        attacker: String,
        defender: String,
        damage: f64,
        message: String,
    },

    /// The current monster died and its experience was awarded.
    MonsterDefeated {
        name: String,
        experience: u64,
        message: String,
    },

    /// A special attack fell back to a basic attack for lack of mana.
    ManaExhausted { actor: String, message: String },

    /// The player healed.
    Healed { amount: f64, message: String },

    /// The player reached a new level.
    LeveledUp { level: u32, message: String },

    /// The player died.
    PlayerDied { name: String, message: String },

    /// The session is over; no further actions are accepted.
    GameOver { message: String },
}

impl CombatEvent {
    /// The preformatted text for this event.
    pub fn message(&self) -> &str {
        match self {
            CombatEvent::CriticalFailure { message, .. }
            | CombatEvent::DamageDealt { message, .. }
            | CombatEvent::MonsterDefeated { message, .. }
            | CombatEvent::ManaExhausted { message, .. }
            | CombatEvent::Healed { message, .. }
            | CombatEvent::LeveledUp { message, .. }
            | CombatEvent::PlayerDied { message, .. }
            | CombatEvent::GameOver { message } => message,
        }
    }
}

/// One player against a sequence of monsters.
///
/// Terminates by recording an explicit `over` flag when the player dies;
/// once terminal, [`Encounter::submit_action`] is a no-op.
pub struct Encounter {
    player: Player,
    catalog: Vec<MonsterTemplate>,
    current_monster: Monster,
    monsters_killed: u32,
    over: bool,
}

impl Encounter {
    /// Creates an encounter and spawns the first monster from the catalog.
    pub fn new(
        player: Player,
        catalog: Vec<MonsterTemplate>,
        rng: &mut impl Rng,
    ) -> Result<Self, EncounterError> {
        if catalog.is_empty() {
            return Err(EncounterError::EmptyCatalog);
        }
        let current_monster = roll_monster(&catalog, rng);
        Ok(Self {
            player,
            catalog,
            current_monster,
            monsters_killed: 0,
            over: false,
        })
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn current_monster(&self) -> &Monster {
        &self.current_monster
    }

    pub fn monsters_killed(&self) -> u32 {
        self.monsters_killed
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Resolves one full round for the submitted action.
    ///
    /// Returns the events that occurred, in order. Once the encounter is
    /// over, returns no events and changes nothing.
    pub fn submit_action(&mut self, action: Action, rng: &mut impl Rng) -> Vec<CombatEvent> {
        let mut events = Vec::new();
        if self.over {
            return events;
        }
        debug!(?action, "resolving round");
        self.resolve_player_turn(action, rng, &mut events);
        events
    }

    fn resolve_player_turn(
        &mut self,
        action: Action,
        rng: &mut impl Rng,
        events: &mut Vec<CombatEvent>,
    ) {
        // Fumble check comes first: the whole turn is wasted and the
        // monster does not get a free swing.
        if rng.gen::<f64>() < CRITICAL_FAILURE_CHANCE {
            events.push(critical_failure(self.player.name()));
            return;
        }

        let damage = match action {
            Action::Attack => Some(self.player.attack_roll(rng)),
            Action::Special => {
                let cast = self.player.cast_special(rng);
                if cast.fell_back {
                    events.push(CombatEvent::ManaExhausted {
                        actor: self.player.name().to_string(),
                        message: format!(
                            "{} is out of mana and falls back to a basic attack!",
                            self.player.name()
                        ),
                    });
                }
                Some(cast.damage)
            }
            Action::Heal => {
                self.player.heal(HEAL_AMOUNT);
                events.push(CombatEvent::Healed {
                    amount: HEAL_AMOUNT,
                    message: format!(
                        "{} recovers {:.0} health.",
                        self.player.name(),
                        HEAL_AMOUNT
                    ),
                });
                None
            }
        };

        if let Some(damage) = damage {
            self.current_monster.take_damage(damage);
            events.push(damage_dealt(
                self.player.name(),
                self.current_monster.name(),
                damage,
            ));
        }

        if !self.current_monster.is_alive() {
            self.on_monster_defeated(rng, events);
        } else {
            // Healing still provokes the counter-attack.
            self.resolve_monster_turn(rng, events);
        }
    }

    fn on_monster_defeated(&mut self, rng: &mut impl Rng, events: &mut Vec<CombatEvent>) {
        let name = self.current_monster.name().to_string();
        let experience = self.current_monster.experience_reward;
        events.push(CombatEvent::MonsterDefeated {
            message: format!("{} is dead!", name),
            name,
            experience,
        });

        if let Some(level) = self.player.gain_experience(experience) {
            events.push(CombatEvent::LeveledUp {
                level,
                message: format!("{} reaches level {}!", self.player.name(), level),
            });
        }

        self.monsters_killed += 1;
        self.spawn_monster(rng);
    }

    fn resolve_monster_turn(&mut self, rng: &mut impl Rng, events: &mut Vec<CombatEvent>) {
        if rng.gen::<f64>() < CRITICAL_FAILURE_CHANCE {
            events.push(critical_failure(self.current_monster.name()));
            return;
        }

        let damage = self.current_monster.combatant.attack_roll(rng);
        self.player.take_damage(damage);
        events.push(damage_dealt(
            self.current_monster.name(),
            self.player.name(),
            damage,
        ));

        if !self.player.is_alive() {
            events.push(CombatEvent::PlayerDied {
                name: self.player.name().to_string(),
                message: format!("{} is dead!", self.player.name()),
            });
            events.push(CombatEvent::GameOver {
                message: "Game over.".to_string(),
            });
            self.over = true;
        }
    }

    /// Replaces the current monster with a fresh spawn from the catalog.
    fn spawn_monster(&mut self, rng: &mut impl Rng) {
        self.current_monster = roll_monster(&self.catalog, rng);
        debug!(monster = self.current_monster.name(), "spawned monster");
    }
}

fn roll_monster(catalog: &[MonsterTemplate], rng: &mut impl Rng) -> Monster {
    let index = rng.gen_range(0..catalog.len());
    Monster::from_template(&catalog[index])
}

fn critical_failure(actor: &str) -> CombatEvent {
    CombatEvent::CriticalFailure {
        actor: actor.to_string(),
        message: format!("{} suffers a critical failure!", actor),
    }
}

fn damage_dealt(attacker: &str, defender: &str, damage: f64) -> CombatEvent {
    CombatEvent::DamageDealt {
        attacker: attacker.to_string(),
        defender: defender.to_string(),
        damage,
        message: format!("{} deals {:.2} damage to {}.", attacker, damage, defender),
    }
}
