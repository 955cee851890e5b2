use std::fmt;

use log::debug;

use crate::spatial::{
    CellSize, CellVector, FieldSize, Integral, Real, Region, Vector, WorldVector, flatten,
    inbounds, quantize,
};

/// The geometry of a grid-based spatial index.
///
/// A `Grid` pairs a cell size with a field size, both validated once at construction, so that
/// mapping positions to table slots on the hot path needs no further checks.
///
/// The grid covers the inclusive box `[0, field_size]` on every axis, matching [`inbounds`]. Its
/// table therefore holds `product(field_size + 1)` slots and slots are flattened with radix
/// `field_size + 1`, which keeps every in-bounds cell on a distinct slot.
///
/// # Example
///
/// ```rust
/// use rusty_spatial::spatial::{Grid, Vector};
///
/// let grid: Grid<f32, i32, 2> =
///     Grid::new(Vector::new([10.0, 10.0]), Vector::new([9, 9])).unwrap();
/// assert_eq!(grid.capacity(), 100);
/// assert_eq!(grid.slot_of(Vector::new([15.0, 0.0])), Some(1));
/// assert_eq!(grid.slot_of(Vector::new([-1.0, 0.0])), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid<R, I, const N: usize> {
    cell_size: CellSize<R, N>,
    field_size: FieldSize<I, N>,
    radix: FieldSize<I, N>,
    capacity: usize,
}

impl<R: Real, I: Integral, const N: usize> Grid<R, I, N> {
    /// Construct a grid, rejecting non-positive cell sizes, negative field sizes and fields whose
    /// slot count does not fit in both `I` and `usize`.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn new(cell_size: CellSize<R, N>, field_size: FieldSize<I, N>) -> Result<Self, GridError> {
        if let Some(axis) = cell_size.iter().position(|&size| !(size > R::ZERO)) {
            return Err(GridError::NonPositiveCellSize { axis });
        }
        if let Some(axis) = field_size.iter().position(|&size| size < I::ZERO) {
            return Err(GridError::NegativeFieldSize { axis });
        }

        let mut radix = field_size;
        let mut slots = I::ONE;
        for axis in 0..N {
            radix[axis] = field_size[axis]
                .checked_add(I::ONE)
                .ok_or(GridError::CapacityOverflow)?;
            slots = slots
                .checked_mul(radix[axis])
                .ok_or(GridError::CapacityOverflow)?;
        }
        let capacity = slots.to_usize().ok_or(GridError::CapacityOverflow)?;

        debug!(
            "grid created: cell size {cell_size:?}, field size {field_size:?}, {capacity} slots"
        );

        Ok(Self {
            cell_size,
            field_size,
            radix,
            capacity,
        })
    }

    /// The world-space size of one cell.
    #[inline]
    pub fn cell_size(&self) -> CellSize<R, N> {
        self.cell_size
    }

    /// The number of cells along each axis.
    #[inline]
    pub fn field_size(&self) -> FieldSize<I, N> {
        self.field_size
    }

    /// The number of table slots needed to hold every in-bounds cell.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The cell containing a world-space position. The cell may lie outside the grid.
    #[inline]
    pub fn cell_of(&self, point: WorldVector<R, N>) -> CellVector<I, N> {
        quantize(self.cell_size, point)
    }

    /// True if `cell` lies on the grid.
    #[inline]
    pub fn contains_cell(&self, cell: CellVector<I, N>) -> bool {
        inbounds(self.field_size, cell)
    }

    /// The table slot of a cell, or `None` if the cell lies outside the grid.
    #[inline]
    pub fn slot_of_cell(&self, cell: CellVector<I, N>) -> Option<usize> {
        if !self.contains_cell(cell) {
            return None;
        }
        flatten(self.radix, cell).to_usize()
    }

    /// The table slot of a world-space position, or `None` if it lies outside the grid.
    #[inline]
    pub fn slot_of(&self, point: WorldVector<R, N>) -> Option<usize> {
        self.slot_of_cell(self.cell_of(point))
    }

    /// The on-grid cell nearest to `cell`, clamping every axis into `[0, field_size]`.
    #[inline]
    pub fn clamp_cell(&self, cell: CellVector<I, N>) -> CellVector<I, N> {
        cell.max_axes(Vector::splat(I::ZERO)).min_axes(self.field_size)
    }

    /// The table slot of the on-grid cell nearest to a world-space position.
    ///
    /// Positions outside the grid are filed under a border cell, so the result is always below
    /// [`Grid::capacity`]. This is the usual `Hashable::hash` for a position component.
    #[inline]
    pub fn nearest_slot(&self, point: WorldVector<R, N>) -> usize {
        let cell = self.clamp_cell(self.cell_of(point));
        flatten(self.radix, cell).to_usize().unwrap_or(0)
    }

    /// The cells overlapping the world-space box between `low` and `high`, clipped to the grid.
    pub fn cells_between(&self, low: WorldVector<R, N>, high: WorldVector<R, N>) -> Region<I, N> {
        let low = self.cell_of(low).max_axes(Vector::splat(I::ZERO));
        let high = self.cell_of(high).min_axes(self.field_size);
        Region::new(low, high)
    }

    /// The table slots overlapping the world-space box between `low` and `high`.
    ///
    /// Slots are produced in region order: first axis outermost.
    pub fn slots_between(
        &self,
        low: WorldVector<R, N>,
        high: WorldVector<R, N>,
    ) -> impl Iterator<Item = usize> + '_ {
        self.cells_between(low, high)
            .into_iter()
            .filter_map(move |cell| self.slot_of_cell(cell))
    }
}

/// An error describing why grid geometry was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A cell size axis was zero, negative or NaN.
    NonPositiveCellSize {
        /// The offending axis.
        axis: usize,
    },
    /// A field size axis was negative.
    NegativeFieldSize {
        /// The offending axis.
        axis: usize,
    },
    /// The number of slots does not fit the index type.
    CapacityOverflow,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::NonPositiveCellSize { axis } => {
                write!(f, "cell size must be positive on axis {axis}")
            }
            GridError::NegativeFieldSize { axis } => {
                write!(f, "field size must not be negative on axis {axis}")
            }
            GridError::CapacityOverflow => write!(f, "grid slot count overflows the index type"),
        }
    }
}

impl std::error::Error for GridError {}
