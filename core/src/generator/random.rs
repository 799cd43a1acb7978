use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Spawns a `2` tile (exponent 1) or, with the configured odds, a `4` tile (exponent 2) on a uniformly random cell.
#[derive(Clone, Debug)]
pub struct RandomTileGenerator<R = SmallRng> {
    rng: R,
    config: GameConfig,
}

impl RandomTileGenerator<SmallRng> {
    pub fn new(seed: u64, config: GameConfig) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed), config)
    }
}

impl<R: Rng> RandomTileGenerator<R> {
    pub fn from_rng(rng: R, config: GameConfig) -> Self {
        let normalized = config.normalized();
        if normalized != config {
            log::warn!(
                "High tile odds {:?} are not a valid ratio, using {:?}",
                config.high_tile_odds,
                normalized.high_tile_odds
            );
        }
        Self {
            rng,
            config: normalized,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }
}

impl<R: Rng> TileGenerator for RandomTileGenerator<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn tile_exponent(&mut self) -> Exponent {
        let (numerator, denominator) = self.config.high_tile_odds;
        if self.rng.random_ratio(numerator, denominator) {
            HIGH_TILE_EXPONENT
        } else {
            BASE_TILE_EXPONENT
        }
    }
}
