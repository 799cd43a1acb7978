#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use error::*;
pub use field::*;
pub use generator::*;
pub use types::*;

mod error;
mod field;
mod generator;
mod types;

/// Width and height of the field.
pub const SIZE: usize = 4;

/// Largest exponent accepted by [`GameField::set_cell_value`], keeps `2^p` well inside [`Score`].
pub const MAX_EXPONENT: Exponent = 48;

/// Exponent of a regular spawn, a `2` tile.
pub const BASE_TILE_EXPONENT: Exponent = 1;

/// Exponent of the rarer spawn, a `4` tile.
pub const HIGH_TILE_EXPONENT: Exponent = 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Chance of spawning a `4` instead of a `2`, as `(numerator, denominator)`.
    pub high_tile_odds: (u32, u32),
}

impl GameConfig {
    pub const fn new_unchecked(high_tile_odds: (u32, u32)) -> Self {
        Self { high_tile_odds }
    }

    pub fn new((numerator, denominator): (u32, u32)) -> Self {
        let denominator = denominator.max(1);
        let numerator = numerator.min(denominator);
        Self::new_unchecked((numerator, denominator))
    }

    pub fn normalized(self) -> Self {
        Self::new(self.high_tile_odds)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked((1, 10))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_clamps_odds() {
        assert_eq!(GameConfig::new((3, 0)).high_tile_odds, (1, 1));
        assert_eq!(GameConfig::new((12, 10)).high_tile_odds, (10, 10));
        assert_eq!(GameConfig::new((0, 10)).high_tile_odds, (0, 10));
    }

    #[test]
    fn default_config_is_one_in_ten() {
        assert_eq!(GameConfig::default().high_tile_odds, (1, 10));
        assert_eq!(GameConfig::default().normalized(), GameConfig::default());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = GameConfig::new((1, 4));
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<GameConfig>(&json).unwrap(), config);
    }
}
