//! Skirmish - Turn-Based Combat Simulator Library
//!
//! This module exposes the combat core for the console binary, tests and
//! external use. The presentation layer renders [`CombatEvent`]s and feeds
//! [`Action`]s back in; the core never touches a terminal.

pub mod character;
pub mod combat;
pub mod core;

pub use character::archetypes::PlayerArchetype;
pub use character::player::Player;
pub use combat::logic::{Action, CombatEvent, Encounter};
pub use combat::types::{Combatant, Monster, MonsterTemplate};
