//! Component types shared by the benchmarks.

use std::sync::LazyLock;

use rusty_spatial::{
    ecs::Hashable,
    spatial::{Grid, Vec3, Vector},
};
use rusty_spatial_macros::{Component, Hashable};

/// World-space size of one grid cell on every axis.
pub const CELL_SIZE: f32 = 4.0;

/// Number of cells per axis, inclusive upper bound.
pub const FIELD_SIZE: i32 = 49;

/// The grid every [`Position`] is hashed through: a 200 unit cube split into 50³ cells.
pub static GRID: LazyLock<Grid<f32, i32, 3>> = LazyLock::new(|| {
    Grid::new(Vector::splat(CELL_SIZE), Vector::splat(FIELD_SIZE))
        .expect("benchmark grid constants are valid")
});

/// 3D position component, indexed by grid cell.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Position(pub Vec3<f32>);

impl Hashable for Position {
    fn max_hash() -> Self {
        Position(Vector::splat(CELL_SIZE * FIELD_SIZE as f32))
    }

    #[inline]
    fn hash(&self) -> usize {
        GRID.nearest_slot(self.0)
    }
}

/// 3D velocity component (12 bytes). Never indexed.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Faction tag, indexed by variant.
#[derive(Component, Hashable, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Faction {
    Neutral,
    Player,
    Ally,
    Enemy,
}

impl Faction {
    pub const ALL: [Faction; 4] = [
        Faction::Neutral,
        Faction::Player,
        Faction::Ally,
        Faction::Enemy,
    ];
}
