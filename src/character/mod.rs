//! Player character and selectable archetypes.

#![allow(unused_imports)]

pub mod archetypes;
pub mod player;

pub use archetypes::*;
pub use player::*;
