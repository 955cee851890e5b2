use std::collections::HashMap;

use fixedbitset::FixedBitSet;
use log::trace;

use crate::ecs::{
    component::Hashable,
    entity,
    storage::{Store, StoreError},
};

/// A component store that also indexes entities by the hash of their component.
///
/// The table holds one bucket per slot in `0..=C::max_hash().hash()`. Buckets are allocated up
/// front when [`Hashable::hash_capacity`] fits a `usize` and on demand otherwise. Writing a
/// component puts the entity in the bucket of the component's hash, moving it out of its previous
/// bucket when the value changes. With a spatial [`Hashable`] impl (a position hashed through a
/// [`Grid`](crate::spatial::Grid)) every bucket is a grid cell, and neighbourhood queries become
/// bucket lookups over [`Grid::slots_between`](crate::spatial::Grid::slots_between).
///
/// # Performance Characteristics
///
/// | Operation | Time |
/// |-----------|------|
/// | `write()` | O(1) amortized + O(bucket) when replacing |
/// | `read()` | O(1) |
/// | `entities_at()` | O(1) |
/// | `occupied_slots()` | O(capacity / word size) |
///
/// # Example
///
/// ```ignore
/// let mut table: IndexTable<Team> = IndexTable::new();
/// table.write(a, Team::Red)?;
/// table.write(b, Team::Blue)?;
///
/// assert_eq!(table.entities_with(&Team::Red), &[a]);
/// ```
#[derive(Debug, Clone)]
pub struct IndexTable<C> {
    components: HashMap<entity::Id, C>,
    buckets: Vec<Vec<entity::Id>>,
    occupied: FixedBitSet,
    max_slot: usize,
}

impl<C: Hashable> IndexTable<C> {
    /// Creates a new, empty table.
    pub fn new() -> Self {
        let capacity = C::hash_capacity().unwrap_or(0);
        Self {
            components: HashMap::new(),
            buckets: vec![Vec::new(); capacity],
            occupied: FixedBitSet::with_capacity(capacity),
            max_slot: C::max_hash().hash(),
        }
    }

    /// The largest slot a component may hash to.
    #[inline]
    pub fn max_slot(&self) -> usize {
        self.max_slot
    }

    /// Returns the number of components currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if no components are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The entities whose component hashes to `slot`. Empty for out-of-range slots.
    #[inline]
    pub fn entities_at(&self, slot: usize) -> &[entity::Id] {
        self.buckets.get(slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The entities whose component hashes to the same slot as `value`.
    #[inline]
    pub fn entities_with(&self, value: &C) -> &[entity::Id] {
        self.entities_at(value.hash())
    }

    /// The entities in any of the given slots, slot by slot.
    pub fn entities_in<'a>(
        &'a self,
        slots: impl IntoIterator<Item = usize> + 'a,
    ) -> impl Iterator<Item = entity::Id> + 'a {
        slots
            .into_iter()
            .flat_map(move |slot| self.entities_at(slot).iter().copied())
    }

    /// The slots holding at least one entity, in ascending order.
    #[inline]
    pub fn occupied_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.occupied.ones()
    }

    /// Removes an entity's component, returning it if it existed.
    pub fn remove(&mut self, id: entity::Id) -> Option<C> {
        let value = self.components.remove(&id)?;
        self.detach(id, value.hash());
        Some(value)
    }

    /// Iterate all `(id, component)` pairs in unspecified order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (entity::Id, &C)> + '_ {
        self.components.iter().map(|(&id, value)| (id, value))
    }

    fn detach(&mut self, id: entity::Id, slot: usize) {
        let Some(bucket) = self.buckets.get_mut(slot) else {
            return;
        };
        if let Some(position) = bucket.iter().position(|&other| other == id) {
            bucket.swap_remove(position);
        }
        if bucket.is_empty() {
            self.occupied.set(slot, false);
        }
    }
}

impl<C: Hashable> Default for IndexTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Hashable> Store for IndexTable<C> {
    type Component = C;
    type Init = ();
    type Error = StoreError;

    #[inline]
    fn initialize(_: ()) -> Self {
        Self::new()
    }

    #[inline]
    fn read(&self, id: entity::Id) -> Option<&C> {
        self.components.get(&id)
    }

    /// Attach a component and file the entity under the component's hash.
    ///
    /// Fails with [`StoreError::HashOutOfRange`] if the value hashes past `C::max_hash()`, and
    /// with [`StoreError::SlotOverflow`] if it hashes to `usize::MAX`. On failure the store is
    /// left unchanged.
    fn write(&mut self, id: entity::Id, value: C) -> Result<(), StoreError> {
        let slot = value.hash();
        if slot > self.max_slot {
            return Err(StoreError::HashOutOfRange {
                hash: slot,
                max: self.max_slot,
            });
        }
        if slot >= self.buckets.len() {
            let len = slot
                .checked_add(1)
                .ok_or(StoreError::SlotOverflow { hash: slot })?;
            self.buckets.resize_with(len, Vec::new);
            self.occupied.grow(len);
        }

        if let Some(previous) = self.components.insert(id, value) {
            self.detach(id, previous.hash());
        }
        self.buckets[slot].push(id);
        self.occupied.insert(slot);
        trace!("indexed entity {id} at slot {slot}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Team {
        Red,
        Green,
        Blue,
    }

    impl Hashable for Team {
        fn max_hash() -> Self {
            Team::Blue
        }

        fn hash(&self) -> usize {
            *self as usize
        }
    }

    /// Deliberately breaks the contract for values above 3.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Level(usize);

    impl Hashable for Level {
        fn max_hash() -> Self {
            Level(3)
        }

        fn hash(&self) -> usize {
            self.0
        }
    }

    fn id(raw: u64) -> entity::Id {
        entity::Id::new(raw)
    }

    /// Hashes across the whole `usize` range.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Wide(usize);

    impl Hashable for Wide {
        fn max_hash() -> Self {
            Wide(usize::MAX)
        }

        fn hash(&self) -> usize {
            self.0
        }
    }

    #[test]
    fn new_table_has_one_bucket_per_slot() {
        let table: IndexTable<Team> = IndexTable::new();
        assert_eq!(table.max_slot(), 2);
        assert!(table.is_empty());
        assert_eq!(table.occupied_slots().count(), 0);
    }

    #[test]
    fn write_files_entity_under_hash() {
        // Given
        let mut table = IndexTable::new();

        // When
        table.write(id(0), Team::Red).unwrap();
        table.write(id(1), Team::Blue).unwrap();
        table.write(id(2), Team::Red).unwrap();

        // Then
        assert_eq!(table.entities_with(&Team::Red), &[id(0), id(2)]);
        assert_eq!(table.entities_with(&Team::Blue), &[id(1)]);
        assert!(table.entities_with(&Team::Green).is_empty());
        assert_eq!(table.occupied_slots().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(table.read(id(1)), Some(&Team::Blue));
    }

    #[test]
    fn rewrite_moves_entity_between_buckets() {
        // Given
        let mut table = IndexTable::new();
        table.write(id(7), Team::Red).unwrap();

        // When
        table.write(id(7), Team::Green).unwrap();

        // Then
        assert!(table.entities_with(&Team::Red).is_empty());
        assert_eq!(table.entities_with(&Team::Green), &[id(7)]);
        assert_eq!(table.occupied_slots().collect::<Vec<_>>(), vec![1]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn rewrite_with_same_value_keeps_single_entry() {
        let mut table = IndexTable::new();
        table.write(id(1), Team::Green).unwrap();
        table.write(id(1), Team::Green).unwrap();
        assert_eq!(table.entities_with(&Team::Green), &[id(1)]);
    }

    #[test]
    fn remove_clears_bucket() {
        // Given
        let mut table = IndexTable::new();
        table.write(id(3), Team::Blue).unwrap();

        // When
        let removed = table.remove(id(3));

        // Then
        assert_eq!(removed, Some(Team::Blue));
        assert!(table.entities_with(&Team::Blue).is_empty());
        assert_eq!(table.occupied_slots().count(), 0);
        assert_eq!(table.remove(id(3)), None);
    }

    #[test]
    fn out_of_range_hash_is_refused() {
        // Given
        let mut table = IndexTable::new();
        table.write(id(0), Level(2)).unwrap();

        // When
        let result = table.write(id(0), Level(4));

        // Then - the store is unchanged
        assert_eq!(result, Err(StoreError::HashOutOfRange { hash: 4, max: 3 }));
        assert_eq!(table.read(id(0)), Some(&Level(2)));
        assert_eq!(table.entities_at(2), &[id(0)]);
    }

    #[test]
    fn entities_in_walks_slots_in_order() {
        let mut table = IndexTable::new();
        table.write(id(0), Level(3)).unwrap();
        table.write(id(1), Level(0)).unwrap();
        table.write(id(2), Level(1)).unwrap();

        let found: Vec<_> = table.entities_in([1, 0, 9]).collect();
        assert_eq!(found, vec![id(2), id(1)]);
    }

    #[test]
    fn full_width_hash_grows_buckets_on_demand() {
        // Given
        let mut table = IndexTable::new();

        // When
        table.write(id(0), Wide(5)).unwrap();
        let overflow = table.write(id(1), Wide(usize::MAX));

        // Then
        assert_eq!(table.max_slot(), usize::MAX);
        assert_eq!(table.entities_at(5), &[id(0)]);
        assert_eq!(overflow, Err(StoreError::SlotOverflow { hash: usize::MAX }));
        assert!(!table.contains(id(1)));
        assert_eq!(table.occupied_slots().collect::<Vec<_>>(), vec![5]);
    }
}
