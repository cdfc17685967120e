//! Core combat math and tuning constants.

#![allow(unused_imports)]

pub mod combat_math;
pub mod constants;

pub use combat_math::*;
pub use constants::*;
