//! Entity identifiers and their allocation.
//!
//! Entities are opaque handles around a non-negative integer. They carry no data themselves;
//! component stores associate values with them.
//!
//! # Architecture
//!
//! - **[`Id`]**: the raw identifier. Exposed so identifiers can key external structures.
//! - **[`Entity`]**: a handle around an [`Id`], optionally tagged with the component type it was
//!   created to carry. The tag exists only at compile time; equality, ordering and hashing look at
//!   the identifier alone.
//! - **[`Allocator`]**: a monotonically increasing counter handing out fresh identifiers.
//!
//! # Identifier lifetime
//!
//! Identifiers are never reused. The allocator has no free list and its counter only moves
//! forward, so an identifier that was handed out once (even one whose component write later
//! failed) stays consumed:
//!
//! ```rust,ignore
//! let allocator = Allocator::new();
//! let a = allocator.alloc(); // Entity(0)
//! let b = allocator.alloc(); // Entity(1)
//! ```

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    sync::atomic::{self, AtomicU64},
};

use log::trace;

/// An entity identifier. Identifiers start at zero and are never reused within an allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(u64);

impl Id {
    /// Construct an identifier from a raw value.
    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw identifier value.
    #[inline]
    pub const fn raw(&self) -> u64 {
        self.0
    }

    /// Get the index of this identifier if it were to live in indexable storage (e.g. Vec)
    #[inline]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<u64> for Id {
    #[inline]
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Id> for u64 {
    #[inline]
    fn from(id: Id) -> Self {
        id.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An entity in the ECS.
///
/// `C` optionally names the component type the entity was created with (see
/// [`World::spawn`](crate::ecs::World::spawn)). It has no runtime effect and can be dropped with
/// [`Entity::untyped`] or changed with [`Entity::cast`].
pub struct Entity<C = ()> {
    /// The unique identifier of the entity.
    id: Id,

    _component: PhantomData<fn() -> C>,
}

impl<C> Entity<C> {
    /// Construct an entity handle for an identifier.
    #[inline]
    pub(crate) const fn new(id: Id) -> Self {
        Self {
            id,
            _component: PhantomData,
        }
    }

    /// Get the id of this entity.
    #[inline]
    pub const fn id(&self) -> Id {
        self.id
    }

    /// Get the index of this entity if it were to live in indexable storage (e.g. Vec)
    #[inline]
    pub const fn index(&self) -> usize {
        self.id.index()
    }

    /// Drop the component tag.
    #[inline]
    pub fn untyped(self) -> Entity {
        Entity::new(self.id)
    }

    /// Re-tag the entity with a different component type.
    #[inline]
    pub fn cast<D>(self) -> Entity<D> {
        Entity::new(self.id)
    }
}

// Manual impls so the tag type needs no bounds.
impl<C> Clone for Entity<C> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Entity<C> {}

impl<C> PartialEq for Entity<C> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<C> Eq for Entity<C> {}

impl<C> PartialOrd for Entity<C> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C> Ord for Entity<C> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl<C> Hash for Entity<C> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<C> fmt::Debug for Entity<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Entity({})", self.id.0)
    }
}

impl<C> From<Entity<C>> for Id {
    #[inline]
    fn from(entity: Entity<C>) -> Self {
        entity.id
    }
}

/// An allocator for entities in the ECS.
///
/// Hands out identifiers `0, 1, 2, ...` in order. The counter is an atomic, so allocation takes
/// `&self` and concurrent callers never receive the same identifier; the order in which
/// concurrent callers are served is unspecified.
///
/// The counter never wraps. Identifiers run up to `u64::MAX - 1`; after that the `try_` methods
/// return `None` and the others panic.
#[derive(Default, Debug)]
pub struct Allocator {
    /// Next fresh ID to allocate.
    next_id: AtomicU64,
}

impl Allocator {
    /// Construct a new entity allocator starting from ID 0.
    #[inline]
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    #[inline]
    pub(crate) const fn starting_at(next_id: u64) -> Self {
        Self {
            next_id: AtomicU64::new(next_id),
        }
    }

    /// Allocate a new entity with a fresh identifier.
    ///
    /// # Panics
    ///
    /// If the identifier space is exhausted.
    pub fn alloc(&self) -> Entity {
        match self.try_alloc() {
            Some(entity) => entity,
            None => panic!("entity identifier space exhausted"),
        }
    }

    /// Allocate a new entity, or `None` if the identifier space is exhausted.
    pub fn try_alloc(&self) -> Option<Entity> {
        let id = Id(self.reserve(1)?);
        trace!("allocated entity {id}");
        Some(Entity::new(id))
    }

    /// Allocate many new entities at once.
    ///
    /// The identifiers form one contiguous block reserved with a single atomic step, so a
    /// concurrent `alloc` can never land in the middle of it.
    ///
    /// # Panics
    ///
    /// If fewer than `count` identifiers are left.
    pub fn alloc_many(&self, count: usize) -> Vec<Entity> {
        match self.try_alloc_many(count) {
            Some(entities) => entities,
            None => panic!("entity identifier space exhausted"),
        }
    }

    /// Allocate `count` contiguous entities, or `None` (allocating nothing) if fewer are left.
    pub fn try_alloc_many(&self, count: usize) -> Option<Vec<Entity>> {
        if count == 0 {
            return Some(Vec::new());
        }
        let count = u64::try_from(count).ok()?;
        let start_id = self.reserve(count)?;
        let end_id = start_id + count;
        trace!("allocated entities {start_id}..{end_id}");

        Some((start_id..end_id).map(|id| Entity::new(Id(id))).collect())
    }

    /// The number of identifiers handed out so far, which is also the next identifier.
    #[inline]
    pub fn allocated(&self) -> u64 {
        self.next_id.load(atomic::Ordering::Relaxed)
    }

    /// Advance the counter by `count`, returning the first reserved identifier.
    fn reserve(&self, count: u64) -> Option<u64> {
        self.next_id
            .fetch_update(atomic::Ordering::Relaxed, atomic::Ordering::Relaxed, |next| {
                next.checked_add(count)
            })
            .ok()
    }
}
