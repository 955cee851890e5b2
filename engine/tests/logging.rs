use log::{Level, LevelFilter};
use rusty_spatial::{
    ecs::{
        Hashable,
        storage::IndexTable,
        world::{self, World},
    },
    logging::ChannelLogger,
    spatial::{Grid, Vector},
};

#[derive(Debug, Clone, Copy)]
struct Bit(usize);

impl Hashable for Bit {
    fn max_hash() -> Self {
        Bit(1)
    }

    fn hash(&self) -> usize {
        self.0
    }
}

// The global logger can be set once per process, so this binary holds a single test.
#[test]
fn installed_logger_receives_crate_records() {
    // Given
    let logs = ChannelLogger::install(LevelFilter::Debug).unwrap();
    let world = World::new(world::Id::new(9));
    let mut bits = IndexTable::new();

    // When
    Grid::<f32, i32, 2>::new(Vector::splat(1.0), Vector::splat(4)).unwrap();
    world.spawn(&mut bits, Bit(0)).unwrap();
    let _ = world.spawn(&mut bits, Bit(2));

    // Then
    let records: Vec<_> = logs.try_iter().collect();
    assert!(
        records
            .iter()
            .any(|r| r.level == Level::Debug && r.message.contains("25 slots"))
    );
    assert!(
        records
            .iter()
            .any(|r| r.level == Level::Warn && r.message.starts_with("world 9"))
    );
    // Trace records are filtered out at the installed level.
    assert!(records.iter().all(|r| r.level <= Level::Debug));
    assert!(records.iter().all(|r| r.target.starts_with("rusty_spatial")));
}
