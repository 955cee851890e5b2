//! Component capabilities for the ECS.
//!
//! Components are the data attached to entities. This module defines the traits a component type
//! implements to take part in the ECS:
//!
//! - [`Component`]: the bounds every component type must satisfy.
//! - [`Hashable`]: opt-in capability for components that map onto a bounded range of table slots,
//!   used by [`IndexTable`](crate::ecs::storage::IndexTable) to index entities by value.
//!
//! ## Usage
//!
//! ```ignore
//! use rusty_spatial_macros::{Component, Hashable};
//!
//! #[derive(Component, Hashable, Clone, Copy)]
//! enum Team { Red, Green, Blue }
//!
//! assert_eq!(Team::Green.hash(), 1);
//! assert_eq!(Team::hash_capacity(), Some(3));
//! ```

/// A trait representing a component in the ECS (Entity Component System).
///
/// At present this only sets the required trait bounds for a type to be used as a component.
pub trait Component: 'static + Sized + Send + Sync {}

/// A component that hashes onto a bounded range of flat table slots.
///
/// Implementors provide the value with the largest hash ([`Hashable::max_hash`]) and a pure
/// [`Hashable::hash`] function.
///
/// # Contract
///
/// For every value `v` of the type, `v.hash() <= Self::max_hash().hash()`. The lower bound of zero
/// is implied by `usize`. Nothing checks this at runtime; consumers may rely on it and a type that
/// breaks it is a bug in that type. Stores that index by hash may refuse out-of-range values.
///
/// # Derive Macro
///
/// Fieldless enums can use `#[derive(Hashable)]`: variants hash to their declaration position and
/// the last variant is `max_hash`.
///
/// Spatial components usually implement it by hand on top of a [`Grid`](crate::spatial::Grid):
///
/// ```rust,ignore
/// impl Hashable for Position {
///     fn max_hash() -> Self {
///         Position(Vector::new([FIELD_WIDTH, FIELD_HEIGHT]))
///     }
///
///     fn hash(&self) -> usize {
///         GRID.slot_of(self.0).unwrap_or(0)
///     }
/// }
/// ```
pub trait Hashable: Sized {
    /// The value that hashes to the largest valid slot.
    fn max_hash() -> Self;

    /// The table slot of this value.
    fn hash(&self) -> usize;

    /// The number of slots a table needs to hold every value of this type.
    ///
    /// `None` when the maximum hash is `usize::MAX`, so the slot count does not fit a `usize`.
    #[inline]
    fn hash_capacity() -> Option<usize> {
        Self::max_hash().hash().checked_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Direction {
        North,
        East,
        South,
        West,
    }

    impl Direction {
        const ALL: [Direction; 4] = [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ];
    }

    impl Hashable for Direction {
        fn max_hash() -> Self {
            Direction::West
        }

        fn hash(&self) -> usize {
            *self as usize
        }
    }

    #[derive(Debug, Clone, Copy)]
    struct Byte(u8);

    impl Hashable for Byte {
        fn max_hash() -> Self {
            Byte(u8::MAX)
        }

        fn hash(&self) -> usize {
            self.0 as usize
        }
    }

    #[test]
    fn hash_capacity_is_one_past_max() {
        assert_eq!(Direction::hash_capacity(), Some(4));
        assert_eq!(Byte::hash_capacity(), Some(256));
    }

    #[derive(Debug, Clone, Copy)]
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
    fn hash_capacity_of_full_width_hash_is_none() {
        assert_eq!(Wide::hash_capacity(), None);
        assert!(Wide(usize::MAX).hash() <= Wide::max_hash().hash());
    }

    #[test]
    fn every_value_hashes_within_bounds() {
        // Given
        let max = Direction::max_hash().hash();

        // Then - the whole domain is enumerable
        assert!(Direction::ALL.iter().all(|d| d.hash() <= max));

        let max = Byte::max_hash().hash();
        assert!((0..=u8::MAX).all(|b| Byte(b).hash() <= max));
    }

    #[derive(rusty_spatial_macros::Component, rusty_spatial_macros::Hashable, Debug, PartialEq)]
    enum Season {
        Spring,
        Summer,
        Autumn,
        Winter,
    }

    fn assert_component<C: Component>() {}

    #[test]
    fn derived_hash_follows_declaration_order() {
        // Given
        let seasons = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

        // When
        let hashes: Vec<_> = seasons.iter().map(Hashable::hash).collect();

        // Then
        assert_eq!(hashes, vec![0, 1, 2, 3]);
        assert_eq!(Season::max_hash(), Season::Winter);
        assert_eq!(Season::hash_capacity(), Some(4));
        assert_component::<Season>();
    }
}
