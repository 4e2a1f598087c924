//! Roll resolution against a seedable random source.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::roll::Roll;

/// The result of resolving a [`Roll`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Individual die values, in throw order (each in `1..=sides`).
    pub values: Vec<u32>,
    /// The flat bonus that was applied.
    pub bonus: i32,
    /// Sum of all values plus the bonus.
    pub total: i64,
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}]", values.join(", "))?;
        if self.bonus > 0 {
            write!(f, " + {}", self.bonus)?;
        } else if self.bonus < 0 {
            write!(f, " - {}", self.bonus.unsigned_abs())?;
        }
        write!(f, " = {}", self.total)
    }
}

/// The result of a percentage check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChanceOutcome {
    /// The d100 value that was drawn (1-100).
    pub roll: u32,
    /// The threshold the draw was compared against.
    pub threshold: u32,
    /// Whether the draw came in at or under the threshold.
    pub success: bool,
}

/// A dice roller owning its random source.
///
/// The generator is held explicitly rather than reached for globally, so
/// a seeded roller replays the same session every time.
pub struct Roller {
    rng: StdRng,
}

impl Roller {
    /// A roller that replays deterministically for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A roller seeded from operating-system entropy.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Resolve a roll specification into individual values and a total.
    ///
    /// # Panics
    ///
    /// Panics if `roll.sides` is zero; there is no empty die to sample.
    /// [`Roll::parse`] never produces one.
    pub fn roll(&mut self, roll: &Roll) -> RollOutcome {
        let values: Vec<u32> = (0..roll.count)
            .map(|_| self.rng.random_range(1..=roll.sides))
            .collect();
        let total = values.iter().map(|&v| i64::from(v)).sum::<i64>() + i64::from(roll.bonus);
        RollOutcome {
            values,
            bonus: roll.bonus,
            total,
        }
    }

    /// Sum `count` uniform draws in `1..=sides`, plus `bonus`.
    ///
    /// A `count` of zero yields just the bonus.
    ///
    /// # Panics
    ///
    /// Panics if `sides` is zero.
    pub fn roll_total(&mut self, sides: u32, count: u32, bonus: i32) -> i64 {
        self.roll(&Roll {
            sides,
            count,
            bonus,
        })
        .total
    }

    /// Draw a d100 and report whether it came in at or under `percentage`.
    ///
    /// A threshold of 0 never succeeds; a threshold of 100 or more always
    /// does.
    pub fn chance(&mut self, percentage: u32) -> bool {
        self.chance_detailed(percentage).success
    }

    /// Like [`Roller::chance`], but keeps the drawn value for display.
    pub fn chance_detailed(&mut self, percentage: u32) -> ChanceOutcome {
        let roll = self.rng.random_range(1..=100);
        ChanceOutcome {
            roll,
            threshold: percentage,
            success: roll <= percentage,
        }
    }

    /// Pick one element uniformly at random, or `None` from an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.rng.random_range(0..items.len()))
    }
}
