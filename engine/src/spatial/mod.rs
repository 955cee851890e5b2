//! Spatial hashing: mapping continuous world-space positions onto a bounded integer grid.
//!
//! The module is a small set of pure functions over [`Vector`]s:
//!
//! - [`quantize`]: world-space position → cell coordinate, per axis `floor(position / cell_size)`.
//! - [`region`]: every cell in the inclusive box between two cell coordinates.
//! - [`flatten`]: cell coordinate → one linear index (mixed radix, first axis least significant).
//! - [`inbounds`]: whether a cell lies in `[0, field_size]` on every axis.
//!
//! [`Grid`] bundles a validated cell size and field size and composes the functions above into
//! the position → table slot mapping a spatial index needs.
//!
//! # Example
//!
//! ```rust
//! use rusty_spatial::spatial::{flatten, inbounds, quantize, Vector};
//!
//! let cell_size = Vector::new([1.0, 1.0]);
//! let field_size = Vector::new([3, 3]);
//!
//! let cell = quantize::<f64, i32, 2>(cell_size, Vector::new([1.5, 0.2]));
//! assert_eq!(cell, Vector::new([1, 0]));
//! assert!(inbounds(field_size, cell));
//! assert_eq!(flatten(field_size, cell), 1);
//! ```
//!
//! # Preconditions
//!
//! None of these functions validate their input. A zero cell size axis makes [`quantize`] divide
//! by zero (the float result then saturates into the integer type), and [`flatten`] happily
//! encodes cells outside the field. Use [`Grid::new`] to validate once up front and
//! [`inbounds`] before flattening untrusted cells.

mod grid;
mod region;
mod scalar;
mod vector;

pub use grid::{Grid, GridError};
pub use region::{Cells, Region};
pub use scalar::{Integral, Real};
pub use vector::{Vec2, Vec3, Vector};

/// Per-axis size of one cell in world units. Every axis must be strictly positive.
pub type CellSize<R, const N: usize> = Vector<R, N>;

/// Number of cells along each axis.
pub type FieldSize<I, const N: usize> = Vector<I, N>;

/// A position in continuous world space.
pub type WorldVector<R, const N: usize> = Vector<R, N>;

/// A discretized cell coordinate.
pub type CellVector<I, const N: usize> = Vector<I, N>;

/// Convert a world-space position into the coordinate of the cell containing it.
///
/// Each axis is divided by the matching cell size and rounded towards negative infinity, so
/// positions just below zero land in cell `-1` rather than cell `0`.
#[inline]
pub fn quantize<R: Real, I: Integral, const N: usize>(
    cell_size: CellSize<R, N>,
    point: WorldVector<R, N>,
) -> CellVector<I, N> {
    point.zip_with(cell_size, |p, size| I::from_floored((p / size).floor()))
}

/// Enumerate every cell between `low` and `high`, both inclusive.
///
/// The first axis is the outermost loop. The result is lazy and can be iterated repeatedly.
#[inline]
pub fn region<I: Integral, const N: usize>(
    low: CellVector<I, N>,
    high: CellVector<I, N>,
) -> Region<I, N> {
    Region::new(low, high)
}

/// Encode a cell coordinate as a single index into a table of `field_size` cells.
///
/// Mixed-radix encoding with the first axis as the least significant digit:
/// `cell[0] + field[0] * (cell[1] + field[1] * (cell[2] + ...))`.
///
/// No bounds checking happens here. A cell outside the field still produces an index, just not
/// one inside `0..product(field_size)`. Arithmetic wraps rather than overflowing.
#[inline]
pub fn flatten<I: Integral, const N: usize>(
    field_size: FieldSize<I, N>,
    cell: CellVector<I, N>,
) -> I {
    field_size
        .iter()
        .zip(cell.iter())
        .rev()
        .fold(I::ZERO, |acc, (&size, &c)| size.wrapping_mul(acc).wrapping_add(c))
}

/// True if every axis of `cell` satisfies `0 <= cell <= field_size`.
///
/// The upper bound is inclusive: `inbounds(f, f)` is `true`. A table holding exactly
/// `product(field_size)` slots has no room for the boundary cell, so callers sizing a table that
/// way must additionally reject `cell == field_size` on any axis. [`Grid`] sizes its table for the
/// inclusive box instead.
#[inline]
pub fn inbounds<I: Integral, const N: usize>(
    field_size: FieldSize<I, N>,
    cell: CellVector<I, N>,
) -> bool {
    field_size.all_with(&cell, |size, c| c >= I::ZERO && c <= size)
}
