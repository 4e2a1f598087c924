//! Roll specifications and dice notation.

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};

/// A roll specification: how many dice, how many sides, and a flat bonus
/// added after summing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    /// Sides per die.
    pub sides: u32,
    /// Number of dice thrown.
    pub count: u32,
    /// Flat offset added to the summed dice (may be negative).
    pub bonus: i32,
}

impl Roll {
    /// A single die with the given number of sides and no bonus.
    pub fn new(sides: u32) -> Self {
        Self {
            sides,
            count: 1,
            bonus: 0,
        }
    }

    /// Set how many dice are thrown.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Set the flat bonus.
    pub fn with_bonus(mut self, bonus: i32) -> Self {
        self.bonus = bonus;
        self
    }

    /// Parse notation like `d20`, `3d6`, or `2d8+1`.
    ///
    /// The count defaults to 1 when omitted; the bonus to 0. Whitespace
    /// around the parts is tolerated (`2d6 + 3`).
    pub fn parse(input: &str) -> DiceResult<Self> {
        let original = input.trim();
        let text = original.to_lowercase();
        let invalid = || DiceError::InvalidNotation(original.to_string());

        let (count_part, rest) = text.split_once('d').ok_or_else(invalid)?;

        let count: u32 = if count_part.trim().is_empty() {
            1
        } else {
            count_part.trim().parse().map_err(|_| invalid())?
        };

        let (sides_part, bonus) = if let Some((sides, bonus)) = rest.split_once('+') {
            (sides, bonus.trim().parse::<i32>().map_err(|_| invalid())?)
        } else if let Some((sides, bonus)) = rest.split_once('-') {
            (sides, -bonus.trim().parse::<i32>().map_err(|_| invalid())?)
        } else {
            (rest, 0)
        };

        let sides: u32 = sides_part.trim().parse().map_err(|_| invalid())?;

        if sides == 0 {
            return Err(DiceError::ZeroSides(original.to_string()));
        }
        if count == 0 {
            return Err(DiceError::ZeroCount(original.to_string()));
        }

        Ok(Self {
            sides,
            count,
            bonus,
        })
    }

    /// The inclusive range of totals this roll can produce.
    pub fn span(&self) -> (i64, i64) {
        let bonus = i64::from(self.bonus);
        let count = i64::from(self.count);
        let sides = i64::from(self.sides);
        (count + bonus, count * sides + bonus)
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        if self.bonus > 0 {
            write!(f, "+{}", self.bonus)?;
        } else if self.bonus < 0 {
            write!(f, "{}", self.bonus)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_die() {
        assert_eq!(Roll::parse("d20"), Ok(Roll::new(20)));
        assert_eq!(Roll::parse("D6"), Ok(Roll::new(6)));
    }

    #[test]
    fn parse_count_and_bonus() {
        assert_eq!(Roll::parse("3d6"), Ok(Roll::new(6).with_count(3)));
        assert_eq!(
            Roll::parse("2d8+1"),
            Ok(Roll::new(8).with_count(2).with_bonus(1))
        );
        assert_eq!(
            Roll::parse("4d10-2"),
            Ok(Roll::new(10).with_count(4).with_bonus(-2))
        );
    }

    #[test]
    fn parse_tolerates_whitespace() {
        assert_eq!(
            Roll::parse("  2d6 + 3 "),
            Ok(Roll::new(6).with_count(2).with_bonus(3))
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            Roll::parse("banana"),
            Err(DiceError::InvalidNotation("banana".to_string()))
        );
        assert_eq!(
            Roll::parse("2x6"),
            Err(DiceError::InvalidNotation("2x6".to_string()))
        );
        assert_eq!(
            Roll::parse("2d6+"),
            Err(DiceError::InvalidNotation("2d6+".to_string()))
        );
        assert_eq!(
            Roll::parse("-2d6"),
            Err(DiceError::InvalidNotation("-2d6".to_string()))
        );
        assert_eq!(Roll::parse(""), Err(DiceError::InvalidNotation(String::new())));
    }

    #[test]
    fn parse_rejects_degenerate_dice() {
        assert_eq!(
            Roll::parse("d0"),
            Err(DiceError::ZeroSides("d0".to_string()))
        );
        assert_eq!(
            Roll::parse("0d6"),
            Err(DiceError::ZeroCount("0d6".to_string()))
        );
    }

    #[test]
    fn span_bounds() {
        assert_eq!(Roll::new(6).with_count(3).span(), (3, 18));
        assert_eq!(Roll::new(20).with_bonus(5).span(), (6, 25));
        assert_eq!(Roll::new(4).with_count(2).with_bonus(-1).span(), (1, 7));
    }

    #[test]
    fn display_canonical() {
        assert_eq!(Roll::new(20).to_string(), "1d20");
        assert_eq!(Roll::new(6).with_count(3).to_string(), "3d6");
        assert_eq!(Roll::new(8).with_count(2).with_bonus(1).to_string(), "2d8+1");
        assert_eq!(
            Roll::new(10).with_count(4).with_bonus(-2).to_string(),
            "4d10-2"
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for notation in ["1d20", "3d6", "2d8+1", "4d10-2"] {
            let roll = Roll::parse(notation).unwrap();
            assert_eq!(roll.to_string(), notation);
        }
    }

    #[test]
    fn serde_round_trip() {
        let roll = Roll::new(6).with_count(2).with_bonus(3);
        let json = serde_json::to_string(&roll).unwrap();
        let back: Roll = serde_json::from_str(&json).unwrap();
        assert_eq!(roll, back);
    }
}
