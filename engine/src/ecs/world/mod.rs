//! The World owns the entity counter of one ECS instance.
//!
//! Component stores live outside the world and are passed to [`World::spawn`] explicitly, so a
//! world can be shared between threads (allocation is atomic) while each store keeps its own
//! ownership story.
//!
//! # Example
//!
//! ```ignore
//! use rusty_spatial::ecs::{storage::{self, Map}, world::{self, World}};
//!
//! let world = World::new(world::Id::new(1));
//! let mut positions: Map<Position> = storage::init_store();
//!
//! // Allocate an entity and attach a component in one step.
//! let entity = world.spawn(&mut positions, Position { x: 0.0, y: 0.0 })?;
//!
//! // Or allocate a bare entity.
//! let other = world.alloc();
//! ```

use std::fmt;

use log::warn;

use crate::ecs::{entity, storage::Store};

/// A world identifier. This is a unique identifier for a world in the ECS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(u32);

impl Id {
    /// Create a new world identifier.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Id(id)
    }

    /// Get the raw identifier value.
    #[inline]
    pub const fn id(&self) -> u32 {
        self.0
    }
}

/// The World is the context entities are allocated in.
///
/// Each world starts its entity counter at zero; identifiers from different worlds are
/// unrelated.
#[derive(Debug)]
pub struct World {
    /// The world's unique identifier.
    id: Id,

    /// The world's entity allocator.
    entity_allocator: entity::Allocator,
}

impl World {
    pub fn new(id: Id) -> Self {
        Self {
            id,
            entity_allocator: entity::Allocator::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    /// The number of entities allocated in this world so far.
    #[inline]
    pub fn allocated(&self) -> u64 {
        self.entity_allocator.allocated()
    }

    /// Allocate a new entity with no components.
    #[inline]
    pub fn alloc(&self) -> entity::Entity {
        self.entity_allocator.alloc()
    }

    /// Allocate `count` new entities with contiguous identifiers.
    #[inline]
    pub fn alloc_many(&self, count: usize) -> Vec<entity::Entity> {
        self.entity_allocator.alloc_many(count)
    }

    /// Allocate a new entity and attach `value` to it in `store`.
    ///
    /// This is two explicit steps. If the store rejects the write, its error is returned as is
    /// and the allocated identifier stays consumed: it is not handed out again.
    pub fn spawn<S: Store>(
        &self,
        store: &mut S,
        value: S::Component,
    ) -> Result<entity::Entity<S::Component>, S::Error> {
        // Allocate a new entity.
        let entity = self.entity_allocator.alloc();

        // Attach the component.
        if let Err(err) = store.write(entity.id(), value) {
            warn!("world {}: component write for {entity:?} failed: {err:?}", self.id.0);
            return Err(err);
        }

        Ok(entity.cast())
    }

    /// Spawn one entity per value, stopping at the first failed write.
    ///
    /// Entities spawned before the failure keep their components. On failure their handles come
    /// back in [`SpawnManyError::spawned`] next to the store's error, so none of them is lost.
    pub fn spawn_many<S: Store>(
        &self,
        store: &mut S,
        values: impl IntoIterator<Item = S::Component>,
    ) -> Result<Vec<entity::Entity<S::Component>>, SpawnManyError<S::Component, S::Error>> {
        let mut spawned = Vec::new();
        for value in values {
            match self.spawn(store, value) {
                Ok(entity) => spawned.push(entity),
                Err(error) => return Err(SpawnManyError { spawned, error }),
            }
        }
        Ok(spawned)
    }
}

/// A batch spawn that stopped at a failed component write.
pub struct SpawnManyError<C, E> {
    /// The entities spawned, with their components written, before the failure.
    pub spawned: Vec<entity::Entity<C>>,

    /// The store's error for the failed write.
    pub error: E,
}

impl<C, E: fmt::Debug> fmt::Debug for SpawnManyError<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SpawnManyError")
            .field("spawned", &self.spawned)
            .field("error", &self.error)
            .finish()
    }
}

impl<C, E: fmt::Display> fmt::Display for SpawnManyError<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "spawn failed after {} entities: {}",
            self.spawned.len(),
            self.error
        )
    }
}

impl<C, E: fmt::Debug + fmt::Display> std::error::Error for SpawnManyError<C, E> {}
