//! Seeded generation of benchmark inputs.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rusty_spatial::spatial::Vector;

use crate::components::{CELL_SIZE, FIELD_SIZE, Faction, Position};

/// Configuration for a scatter of entities over the benchmark grid.
pub struct ScatterConfig {
    /// Number of positions to generate.
    pub count: usize,
    /// How far outside the grid positions may land, in world units.
    pub overshoot: f32,
    /// Random seed for reproducibility.
    pub seed: u64,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            count: 10_000,
            overshoot: 0.0,
            seed: 12345,
        }
    }
}

/// Deterministic source of positions and factions.
pub struct Scatter {
    rng: ChaCha8Rng,
    low: f32,
    high: f32,
}

impl Scatter {
    pub fn new(config: &ScatterConfig) -> Self {
        let extent = CELL_SIZE * (FIELD_SIZE + 1) as f32;
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            low: -config.overshoot,
            high: extent + config.overshoot,
        }
    }

    pub fn position(&mut self) -> Position {
        let (low, high) = (self.low, self.high);
        Position(Vector::new([
            self.rng.gen_range(low..high),
            self.rng.gen_range(low..high),
            self.rng.gen_range(low..high),
        ]))
    }

    pub fn faction(&mut self) -> Faction {
        Faction::ALL[self.rng.gen_range(0..Faction::ALL.len())]
    }

    /// `config.count` positions from a fresh generator.
    pub fn positions(config: &ScatterConfig) -> Vec<Position> {
        let mut scatter = Self::new(config);
        (0..config.count).map(|_| scatter.position()).collect()
    }
}
