//! Component stores.
//!
//! A store associates component values with entity identifiers. The ECS core does not own any
//! store layout; it only talks to stores through the [`Store`] trait:
//!
//! - [`Store::initialize`] builds a store from its initialization argument,
//! - [`Store::read`] looks a component up,
//! - [`Store::write`] attaches (or replaces) a component and may fail.
//!
//! Two stores ship with the crate:
//!
//! - [`Map`]: a plain hash map from entity to component. Writes never fail.
//! - [`IndexTable`]: a [`Map`]-like store for [`Hashable`](crate::ecs::component::Hashable)
//!   components that also buckets entities by component hash, so "which entities have this
//!   value" (or "which entities are in this grid cell") is a slot lookup.
//!
//! # Example
//!
//! ```rust,ignore
//! let world = World::new(world::Id::new(0));
//! let mut positions: Map<Position> = storage::init_store();
//!
//! let entity = world.spawn(&mut positions, Position { x: 1.0, y: 2.0 })?;
//! assert!(positions.read(entity.id()).is_some());
//! ```

mod index;
mod map;

use std::fmt;

pub use index::IndexTable;
pub use map::Map;

use crate::ecs::entity;

/// A component store the ECS can write to and read from.
pub trait Store: Sized {
    /// The component type held by the store.
    type Component;

    /// The argument needed to build an empty store.
    type Init;

    /// The error a write can fail with.
    type Error: fmt::Debug;

    /// Build an empty store.
    fn initialize(init: Self::Init) -> Self;

    /// Get the component of an entity, if it has one.
    fn read(&self, id: entity::Id) -> Option<&Self::Component>;

    /// Attach a component to an entity, replacing any previous value.
    fn write(&mut self, id: entity::Id, value: Self::Component) -> Result<(), Self::Error>;

    /// Check whether an entity has a component in this store.
    #[inline]
    fn contains(&self, id: entity::Id) -> bool {
        self.read(id).is_some()
    }
}

/// Build a store with its default initialization argument.
#[inline]
pub fn init_store<S>() -> S
where
    S: Store,
    S::Init: Default,
{
    S::initialize(S::Init::default())
}

/// An error raised by the stores in this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// A component hashed past the maximum its type declared.
    HashOutOfRange {
        /// The hash the component produced.
        hash: usize,
        /// The hash of the type's maximum value.
        max: usize,
    },
    /// A component hashed to `usize::MAX`, which has no room for a table slot.
    SlotOverflow {
        /// The hash the component produced.
        hash: usize,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StoreError::HashOutOfRange { hash, max } => {
                write!(f, "component hash {hash} exceeds declared maximum {max}")
            }
            StoreError::SlotOverflow { hash } => {
                write!(f, "component hash {hash} does not fit a table slot")
            }
        }
    }
}

impl std::error::Error for StoreError {}
