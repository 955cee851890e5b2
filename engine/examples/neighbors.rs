//! Scatter entities over a 2D grid and ask which of them are near a point.
//!
//! Run with `cargo run --example neighbors`.

use std::sync::LazyLock;

use log::LevelFilter;
use rusty_spatial::{
    ecs::{
        Hashable, Store,
        storage::{self, IndexTable},
        world::{self, World},
    },
    logging::ChannelLogger,
    spatial::{Grid, Vec2, Vector},
};
use rusty_spatial_macros::Component;

const CELL_SIZE: f32 = 10.0;
const FIELD_SIZE: i32 = 15;

static GRID: LazyLock<Grid<f32, i32, 2>> = LazyLock::new(|| {
    Grid::new(Vector::splat(CELL_SIZE), Vector::splat(FIELD_SIZE))
        .expect("grid constants are valid")
});

#[derive(Component, Debug, Clone, Copy, PartialEq)]
struct Position(Vec2<f32>);

impl Hashable for Position {
    fn max_hash() -> Self {
        let far = CELL_SIZE * (FIELD_SIZE as f32 + 0.5);
        Position(Vector::splat(far))
    }

    fn hash(&self) -> usize {
        GRID.nearest_slot(self.0)
    }
}

fn main() {
    let logs = ChannelLogger::install(LevelFilter::Debug).expect("no other logger installed");

    let world = World::new(world::Id::new(1));
    let mut positions: IndexTable<Position> = storage::init_store();

    // A loose diagonal line plus a few stragglers.
    let points = (0..12)
        .map(|i| [i as f32 * 12.5, i as f32 * 11.0 + 3.0])
        .chain([[4.0, 140.0], [150.0, 2.0], [-20.0, -20.0]]);
    for point in points {
        let entity = world
            .spawn(&mut positions, Position(Vector::new(point)))
            .expect("positions always hash onto the grid");
        println!("spawned {entity:?} at {}", Vector::new(point));
    }

    let center = Vector::new([40.0, 40.0]);
    let radius = 15.0;
    let low = center - Vector::splat(radius);
    let high = center + Vector::splat(radius);

    println!("\nentities within {radius} of {center}:");
    for id in positions.entities_in(GRID.slots_between(low, high)) {
        let Some(Position(point)) = positions.read(id) else {
            continue;
        };
        // Buckets are whole cells, so trim to the exact circle.
        let offset = *point - center;
        let distance = (offset[0] * offset[0] + offset[1] * offset[1]).sqrt();
        if distance <= radius {
            println!("  {id} at {point} ({distance:.1} away)");
        }
    }

    println!(
        "\n{} entities over {} occupied of {} slots",
        positions.len(),
        positions.occupied_slots().count(),
        GRID.capacity()
    );

    println!("\nlog:");
    for record in logs.try_iter() {
        println!("  [{}] {}: {}", record.level, record.target, record.message);
    }
}
