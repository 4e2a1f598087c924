//! Dice rolling and chance helpers for Spielwerk.
//!
//! A [`Roll`] describes what to throw (`2d6+3`); a [`Roller`] owns the
//! random source that resolves it. Percentage checks and uniform picks
//! draw from the same generator, so seeding a single [`Roller`]
//! reproduces a whole session.

pub mod error;
pub mod roll;
pub mod roller;

pub use error::{DiceError, DiceResult};
pub use roll::Roll;
pub use roller::{ChanceOutcome, RollOutcome, Roller};
