use std::{collections::HashMap, convert::Infallible};

use crate::ecs::{entity, storage::Store};

/// A component store backed by a hash map keyed by entity identifier.
///
/// Writes always succeed. Identifiers may be arbitrarily sparse.
#[derive(Debug, Clone)]
pub struct Map<C> {
    data: HashMap<entity::Id, C>,
}

impl<C> Map<C> {
    /// Creates a new, empty store.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Returns a mutable reference to an entity's component, if it exists.
    #[inline]
    pub fn get_mut(&mut self, id: entity::Id) -> Option<&mut C> {
        self.data.get_mut(&id)
    }

    /// Removes an entity's component, returning it if it existed.
    #[inline]
    pub fn remove(&mut self, id: entity::Id) -> Option<C> {
        self.data.remove(&id)
    }

    /// Returns the number of components currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if no components are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate all `(id, component)` pairs in unspecified order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (entity::Id, &C)> + '_ {
        self.data.iter().map(|(&id, value)| (id, value))
    }
}

impl<C> Default for Map<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Store for Map<C> {
    type Component = C;
    type Init = ();
    type Error = Infallible;

    #[inline]
    fn initialize(_: ()) -> Self {
        Self::new()
    }

    #[inline]
    fn read(&self, id: entity::Id) -> Option<&C> {
        self.data.get(&id)
    }

    #[inline]
    fn write(&mut self, id: entity::Id, value: C) -> Result<(), Infallible> {
        self.data.insert(id, value);
        Ok(())
    }
}
