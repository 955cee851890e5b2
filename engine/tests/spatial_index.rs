use std::collections::BTreeSet;

use rusty_spatial::{
    ecs::{
        Hashable, Store,
        entity::Id,
        storage::{IndexTable, StoreError},
        world::{self, World},
    },
    spatial::{Grid, Vec2, Vector, flatten, inbounds, quantize},
};
use rusty_spatial_macros::{Component, Hashable};

const CELL: f64 = 2.0;
const FIELD: i64 = 7;

fn grid() -> Grid<f64, i64, 2> {
    Grid::new(Vector::splat(CELL), Vector::splat(FIELD)).unwrap()
}

/// Hashed straight through the free functions, the way a caller without a `Grid` would.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
struct Position(Vec2<f64>);

impl Hashable for Position {
    fn max_hash() -> Self {
        Position(Vector::splat(CELL * FIELD as f64))
    }

    fn hash(&self) -> usize {
        let cell = quantize(Vector::splat(CELL), self.0);
        let radix = Vector::splat(FIELD + 1);
        if inbounds(Vector::splat(FIELD), cell) {
            flatten(radix, cell) as usize
        } else {
            usize::MAX
        }
    }
}

#[derive(Component, Hashable, Debug, Clone, Copy, PartialEq, Eq)]
enum Terrain {
    Grass,
    Sand,
    Water,
    Rock,
}

#[test]
fn free_functions_agree_with_grid() {
    // Given
    let grid = grid();
    let samples = [[0.0, 0.0], [3.9, 0.1], [15.9, 15.9], [7.5, 12.0], [1.0, 14.0]];

    // Then
    for point in samples {
        let position = Position(Vector::new(point));
        assert_eq!(Some(position.hash()), grid.slot_of(position.0), "at {point:?}");
    }
    assert_eq!(Position::hash_capacity(), Some(grid.capacity()));
}

#[test]
fn range_query_finds_entities_in_overlapping_cells() {
    // Given
    let grid = grid();
    let world = World::new(world::Id::new(3));
    let mut positions = IndexTable::new();
    let near = world
        .spawn(&mut positions, Position(Vector::new([5.0, 5.0])))
        .unwrap();
    let edge = world
        .spawn(&mut positions, Position(Vector::new([7.9, 3.0])))
        .unwrap();
    let far = world
        .spawn(&mut positions, Position(Vector::new([14.0, 14.0])))
        .unwrap();

    // When
    let found: BTreeSet<Id> = positions
        .entities_in(grid.slots_between(Vector::new([4.0, 4.0]), Vector::new([6.0, 6.0])))
        .collect();

    // Then - cells (2..=3, 2..=3) hold `near` only; `edge` sits in row 1
    assert!(found.contains(&near.id()));
    assert!(!found.contains(&far.id()));
    assert!(!found.contains(&edge.id()));
    assert_eq!(found.len(), 1);
}

#[test]
fn moving_an_entity_moves_its_bucket() {
    // Given
    let grid = grid();
    let world = World::new(world::Id::new(1));
    let mut positions = IndexTable::new();
    let entity = world
        .spawn(&mut positions, Position(Vector::new([1.0, 1.0])))
        .unwrap();

    // When
    positions
        .write(entity.id(), Position(Vector::new([13.0, 1.0])))
        .unwrap();

    // Then
    let old = grid.slot_of(Vector::new([1.0, 1.0])).unwrap();
    let new = grid.slot_of(Vector::new([13.0, 1.0])).unwrap();
    assert!(positions.entities_at(old).is_empty());
    assert_eq!(positions.entities_at(new), &[entity.id()]);
}

#[test]
fn off_grid_position_is_refused_and_id_is_not_reused() {
    // Given
    let world = World::new(world::Id::new(1));
    let mut positions = IndexTable::new();

    // When
    let refused = world.spawn(&mut positions, Position(Vector::new([-1.0, 0.0])));
    let placed = world
        .spawn(&mut positions, Position(Vector::new([0.0, 0.0])))
        .unwrap();

    // Then
    assert!(matches!(refused, Err(StoreError::HashOutOfRange { max: 63, .. })));
    assert_eq!(placed.id().raw(), 1);
    assert_eq!(positions.len(), 1);
}

#[test]
fn derived_hashable_honours_its_contract() {
    // Given
    let all = [Terrain::Grass, Terrain::Sand, Terrain::Water, Terrain::Rock];
    let max = Terrain::max_hash().hash();

    // Then
    assert_eq!(Terrain::max_hash(), Terrain::Rock);
    assert!(all.iter().all(|terrain| terrain.hash() <= max));
    let distinct: BTreeSet<_> = all.iter().map(Hashable::hash).collect();
    assert_eq!(distinct.len(), all.len());
}

#[test]
fn terrain_table_groups_entities_by_value() {
    // Given
    let world = World::new(world::Id::new(1));
    let mut terrain = IndexTable::new();

    // When
    let entities = world
        .spawn_many(
            &mut terrain,
            [Terrain::Water, Terrain::Grass, Terrain::Water, Terrain::Rock],
        )
        .unwrap();

    // Then
    assert_eq!(
        terrain.entities_with(&Terrain::Water),
        &[entities[0].id(), entities[2].id()]
    );
    assert_eq!(terrain.occupied_slots().collect::<Vec<_>>(), vec![0, 2, 3]);
}
